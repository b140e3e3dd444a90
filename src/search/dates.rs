//-
// Copyright (c) 2026, the Restriq authors
//
// This file is part of Restriq.
//
// Restriq is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option)
// any later version.
//
// Restriq is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along
// with Restriq. If not, see <http://www.gnu.org/licenses/>.

//! Resolution of symbolic time ranges to absolute timestamp intervals.
//!
//! Every resolved window is half-open, `[lower, upper)`, in the same naive
//! local frame as the caller's "now". Weeks are Monday-anchored. Explicit
//! ranges come in as raw form text; the end date is inclusive, so a parsed
//! end of 2024-06-10 yields an upper bound of 2024-06-11 00:00.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::search::criteria::TimeRange;
use crate::support::chronox::*;
use crate::support::error::ValidationError;

/// Date formats an explicit bound may be typed in.
const EXPLICIT_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d.%m.%Y"];

/// An absolute half-open timestamp interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateWindow {
    pub lower: NaiveDateTime,
    pub upper: NaiveDateTime,
}

impl DateWindow {
    fn of_days(start: NaiveDate, days: i64) -> Self {
        DateWindow {
            lower: start.at_midnight(),
            upper: (start + Duration::days(days)).at_midnight(),
        }
    }
}

/// Resolve `range` to an absolute window, `Ok(None)` for `AnyTime`.
///
/// `now` is the caller's fixed reference point; only its date component
/// matters, since every window starts and ends at local midnight.
pub fn resolve(
    range: TimeRange,
    explicit_start: Option<&str>,
    explicit_end: Option<&str>,
    now: NaiveDateTime,
) -> Result<Option<DateWindow>, ValidationError> {
    let today = now.date();

    let window = match range {
        TimeRange::AnyTime => return Ok(None),

        TimeRange::Yesterday => {
            DateWindow::of_days(today - Duration::days(1), 1)
        },
        TimeRange::Today => DateWindow::of_days(today, 1),
        TimeRange::Tomorrow => {
            DateWindow::of_days(today + Duration::days(1), 1)
        },

        // "Last 7 days" includes today; "next 7 days" starts with today.
        TimeRange::Last7Days => {
            DateWindow::of_days(today - Duration::days(6), 7)
        },
        TimeRange::Next7Days => DateWindow::of_days(today, 7),

        TimeRange::LastWeek => {
            DateWindow::of_days(week_start(today) - Duration::days(7), 7)
        },
        TimeRange::ThisWeek => DateWindow::of_days(week_start(today), 7),
        TimeRange::NextWeek => {
            DateWindow::of_days(week_start(today) + Duration::days(7), 7)
        },

        TimeRange::LastMonth => month_window(today, -1),
        TimeRange::ThisMonth => month_window(today, 0),
        TimeRange::NextMonth => month_window(today, 1),

        TimeRange::ExplicitRange => {
            let start = parse_explicit(explicit_start, "start date")?;
            let end = parse_explicit(explicit_end, "end date")?;
            if end < start {
                return Err(ValidationError::InvalidDateRange {
                    field: "end date",
                });
            }

            // The typed end date is inclusive.
            DateWindow {
                lower: start.at_midnight(),
                upper: (end + Duration::days(1)).at_midnight(),
            }
        },
    };

    Ok(Some(window))
}

/// The Monday on or before `date`.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// The calendar month containing `date`, shifted by `offset` months.
fn month_window(date: NaiveDate, offset: i32) -> DateWindow {
    DateWindow {
        lower: month_start(date, offset).at_midnight(),
        upper: month_start(date, offset + 1).at_midnight(),
    }
}

fn month_start(date: NaiveDate, offset: i32) -> NaiveDate {
    let months = date.year() * 12 + date.month0() as i32 + offset;
    NaiveDate::from_ymdx(
        months.div_euclid(12),
        months.rem_euclid(12) as u32 + 1,
        1,
    )
}

fn parse_explicit(
    text: Option<&str>,
    field: &'static str,
) -> Result<NaiveDate, ValidationError> {
    let text = text.map(str::trim).filter(|t| !t.is_empty());
    let text =
        text.ok_or(ValidationError::InvalidDateRange { field })?;

    EXPLICIT_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(text, f).ok())
        .ok_or(ValidationError::InvalidDateRange { field })
}
