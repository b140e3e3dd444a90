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

//! The category builder.
//!
//! Categories live in a multi-valued named property; a `FullString`
//! content test against it matches when any one of the item's category
//! values equals the sought name. The list is deduplicated
//! case-insensitively, first spelling wins.

use crate::search::property::Property;
use crate::search::restriction::{Restriction, TextMatch};

/// Build the category predicate, `None` for an empty list.
pub fn categories(
    categories: &[String],
    match_case: bool,
) -> Option<Restriction> {
    let mut seen = Vec::<String>::new();
    let flags = TextMatch::full_string(!match_case);

    let leaves = categories
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .filter(|c| {
            let lower = c.to_lowercase();
            if seen.contains(&lower) {
                false
            } else {
                seen.push(lower);
                true
            }
        })
        .map(|c| Restriction::content(Property::Categories, flags, c))
        .collect::<Vec<_>>();

    if leaves.is_empty() {
        None
    } else {
        Some(Restriction::or(leaves))
    }
}
