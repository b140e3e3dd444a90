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

//! The time builder: bounds one timestamp property to the resolved
//! window.
//!
//! "Starts"/"Ends" are special because appointments keep their times in
//! four properties: plain start/end for a single appointment, and the
//! recurrence span for a series. A recurring series matches when its span
//! overlaps the window, so those two shapes combine with `Or`.

use chrono::NaiveDateTime;

use crate::search::criteria::{TimeCriteria, TimeProperty};
use crate::search::dates::{resolve, DateWindow};
use crate::search::property::Property;
use crate::search::restriction::{RelOp, Restriction, Value};
use crate::support::error::ValidationError;

/// The property a plain (non-appointment) time filter tests; also the
/// property the `AnyTime` existence test uses for every filter.
fn primary_property(property: TimeProperty) -> Property {
    match property {
        // Callers strip None before asking.
        TimeProperty::None => unreachable!(),
        TimeProperty::Created => Property::CreationTime,
        TimeProperty::Modified => Property::LastModificationTime,
        TimeProperty::Received => Property::MessageDeliveryTime,
        TimeProperty::Sent => Property::ClientSubmitTime,
        TimeProperty::Due => Property::TaskDueDate,
        TimeProperty::Starts => Property::AppointmentStart,
        TimeProperty::Ends => Property::AppointmentEnd,
        TimeProperty::Expires => Property::ExpiryTime,
        TimeProperty::Completed => Property::DateCompleted,
    }
}

fn timestamp(value: NaiveDateTime) -> Value {
    Value::Timestamp(value)
}

/// `lower <= property < upper`.
fn bounded(property: Property, window: &DateWindow) -> Restriction {
    Restriction::and(vec![
        Restriction::compare(property, RelOp::Ge, timestamp(window.lower)),
        Restriction::compare(property, RelOp::Lt, timestamp(window.upper)),
    ])
}

/// The appointment shape: the plain time falls in the window, or the
/// recurrence span overlaps it.
fn appointment_window(
    plain: Property,
    window: &DateWindow,
) -> Restriction {
    let series_overlaps = Restriction::and(vec![
        Restriction::compare(
            Property::RecurrenceStart,
            RelOp::Lt,
            timestamp(window.upper),
        ),
        Restriction::compare(
            Property::RecurrenceEnd,
            RelOp::Ge,
            timestamp(window.lower),
        ),
    ]);
    Restriction::or(vec![bounded(plain, window), series_overlaps])
}

/// Build the time predicate, `None` when no time property is selected.
pub fn time(
    criteria: &TimeCriteria,
    now: NaiveDateTime,
) -> Result<Option<Restriction>, ValidationError> {
    if let TimeProperty::None = criteria.property {
        return Ok(None);
    }

    let window = resolve(
        criteria.range,
        criteria.explicit_start.as_deref(),
        criteria.explicit_end.as_deref(),
        now,
    )?;

    let restriction = match window {
        // "Any time" still requires the property to be set at all.
        None => Restriction::exists(primary_property(criteria.property)),
        Some(ref w) => match criteria.property {
            TimeProperty::Starts => {
                appointment_window(Property::AppointmentStart, w)
            },
            TimeProperty::Ends => {
                appointment_window(Property::AppointmentEnd, w)
            },
            other => bounded(primary_property(other), w),
        },
    };

    Ok(Some(restriction))
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::*;
    use crate::search::criteria::TimeRange;
    use crate::support::chronox::*;

    fn wednesday() -> NaiveDateTime {
        NaiveDate::from_ymdx(2024, 6, 12).and_hmsx(10, 0, 0)
    }

    fn criteria(property: TimeProperty, range: TimeRange) -> TimeCriteria {
        TimeCriteria {
            property,
            range,
            explicit_start: None,
            explicit_end: None,
        }
    }

    #[test]
    fn no_property_builds_nothing() {
        assert_eq!(
            Ok(None),
            time(
                &criteria(TimeProperty::None, TimeRange::Today),
                wednesday()
            )
        );
    }

    #[test]
    fn any_time_with_a_property_is_an_existence_test() {
        assert_eq!(
            Ok(Some(Restriction::exists(Property::MessageDeliveryTime))),
            time(
                &criteria(TimeProperty::Received, TimeRange::AnyTime),
                wednesday()
            )
        );
        assert_eq!(
            Ok(Some(Restriction::exists(Property::AppointmentStart))),
            time(
                &criteria(TimeProperty::Starts, TimeRange::AnyTime),
                wednesday()
            )
        );
    }

    #[test]
    fn plain_property_gets_a_half_open_bound_pair() {
        let lower = NaiveDate::from_ymdx(2024, 6, 12).at_midnight();
        let upper = NaiveDate::from_ymdx(2024, 6, 13).at_midnight();
        assert_eq!(
            Ok(Some(Restriction::And(vec![
                Restriction::compare(
                    Property::ClientSubmitTime,
                    RelOp::Ge,
                    Value::Timestamp(lower),
                ),
                Restriction::compare(
                    Property::ClientSubmitTime,
                    RelOp::Lt,
                    Value::Timestamp(upper),
                ),
            ]))),
            time(
                &criteria(TimeProperty::Sent, TimeRange::Today),
                wednesday()
            )
        );
    }

    #[test]
    fn appointment_start_covers_recurring_series() {
        let lower = NaiveDate::from_ymdx(2024, 6, 12).at_midnight();
        let upper = NaiveDate::from_ymdx(2024, 6, 13).at_midnight();
        let got = time(
            &criteria(TimeProperty::Starts, TimeRange::Today),
            wednesday(),
        )
        .unwrap()
        .unwrap();

        assert_eq!(
            Restriction::Or(vec![
                Restriction::And(vec![
                    Restriction::compare(
                        Property::AppointmentStart,
                        RelOp::Ge,
                        Value::Timestamp(lower),
                    ),
                    Restriction::compare(
                        Property::AppointmentStart,
                        RelOp::Lt,
                        Value::Timestamp(upper),
                    ),
                ]),
                Restriction::And(vec![
                    Restriction::compare(
                        Property::RecurrenceStart,
                        RelOp::Lt,
                        Value::Timestamp(upper),
                    ),
                    Restriction::compare(
                        Property::RecurrenceEnd,
                        RelOp::Ge,
                        Value::Timestamp(lower),
                    ),
                ]),
            ]),
            got
        );
    }

    #[test]
    fn ends_uses_the_appointment_end_property() {
        match time(
            &criteria(TimeProperty::Ends, TimeRange::Today),
            wednesday(),
        )
        .unwrap()
        .unwrap()
        {
            Restriction::Or(arms) => match &arms[0] {
                Restriction::And(bounds) => {
                    assert_matches!(
                        Restriction::Compare {
                            property: Property::AppointmentEnd,
                            ..
                        },
                        &bounds[0]
                    );
                },
                other => panic!("unexpected: {:?}", other),
            },
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn resolver_errors_propagate() {
        let c = TimeCriteria {
            property: TimeProperty::Received,
            range: TimeRange::ExplicitRange,
            explicit_start: Some("2024-06-10".to_owned()),
            explicit_end: Some("2024-06-01".to_owned()),
        };
        assert_matches!(
            Err(ValidationError::InvalidDateRange { .. }),
            time(&c, wednesday())
        );
    }
}
