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

//! The compiler entry point.
//!
//! Builder output is grouped into three conjunctions before the final
//! combination: free text and time; attendees, categories, selections and
//! size; and the message-class filter. Query executors and stored-search
//! descriptions rely on that grouping, so it is kept even though a flat
//! conjunction would be equivalent.

use chrono::NaiveDateTime;
use log::debug;

use super::build::{
    attendees, categories, item_type, selection, size, text, time,
};
use super::criteria::{Criteria, ItemTypeScheme};
use super::restriction::Restriction;
use crate::support::error::ValidationError;

/// Compile `criteria` into a restriction tree.
///
/// `now` is the reference point for symbolic time ranges; callers pass
/// the current local time, tests pass a fixed one. Compilation either
/// yields a complete tree or fails on the first invalid field; criteria
/// with no constraints at all compile to the match-everything tree rather
/// than failing.
pub fn compile(
    criteria: &Criteria,
    now: NaiveDateTime,
) -> Result<Restriction, ValidationError> {
    let mut content = Vec::new();
    if let Some(r) =
        text::free_text(&criteria.free_text, criteria.match_case)
    {
        content.push(r);
    }
    if let Some(r) = time::time(&criteria.time, now)? {
        content.push(r);
    }

    let mut detail = Vec::new();
    if let Some(r) = attendees::attendees(&criteria.attendees) {
        detail.push(r);
    }
    if let Some(r) =
        categories::categories(&criteria.categories, criteria.match_case)
    {
        detail.push(r);
    }
    if let Some(r) = selection::selection(&criteria.selection) {
        detail.push(r);
    }
    if let ItemTypeScheme::Tasks = criteria.item_type {
        if let Some(r) = selection::task_status(criteria.task_status) {
            detail.push(r);
        }
    }
    if let Some(r) = size::size(criteria.size.as_ref())? {
        detail.push(r);
    }

    let mut class = Vec::new();
    if let Some(r) = item_type::item_type(criteria.item_type) {
        class.push(r);
    }

    let restriction = Restriction::and(vec![
        Restriction::and(content),
        Restriction::and(detail),
        Restriction::and(class),
    ]);

    debug!(
        "compiled {:?} search restriction: {:?}",
        criteria.item_type, restriction,
    );
    Ok(restriction)
}
