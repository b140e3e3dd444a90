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

//! The message-class filter.
//!
//! Stores tag every item with a dotted class string (`IPM.Note.Foo`,
//! `IPM.Appointment`, ...), so an item-type filter is a disjunction of
//! case-insensitive prefix tests. Plain mail has no class of its own:
//! "Messages" means "none of the other structured classes", hence the
//! negation.

use crate::search::criteria::ItemTypeScheme;
use crate::search::property::Property;
use crate::search::restriction::{Restriction, TextMatch};

const APPOINTMENT_CLASSES: &[&str] = &["IPM.Appointment", "IPM.Schedule"];
const CONTACT_CLASSES: &[&str] = &["IPM.Contact", "IPM.DistList"];
const NOTE_CLASSES: &[&str] = &["IPM.StickyNote"];
const TASK_CLASSES: &[&str] = &["IPM.Task"];

/// Class prefix test; class strings match case-insensitively regardless
/// of the form's match-case switch.
pub fn class_prefix(class: &str) -> Restriction {
    Restriction::content(
        Property::MessageClass,
        TextMatch::prefix(true),
        class,
    )
}

fn any_class(classes: &[&str]) -> Restriction {
    Restriction::or(classes.iter().map(|c| class_prefix(c)).collect())
}

/// Build the message-class filter for `scheme`, `None` for `AnyItem`.
pub fn item_type(scheme: ItemTypeScheme) -> Option<Restriction> {
    match scheme {
        ItemTypeScheme::AnyItem => None,
        ItemTypeScheme::Appointments => Some(any_class(APPOINTMENT_CLASSES)),
        ItemTypeScheme::Contacts => Some(any_class(CONTACT_CLASSES)),
        ItemTypeScheme::Notes => Some(any_class(NOTE_CLASSES)),
        ItemTypeScheme::Tasks => Some(any_class(TASK_CLASSES)),
        ItemTypeScheme::Messages => {
            let structured = APPOINTMENT_CLASSES
                .iter()
                .chain(CONTACT_CLASSES)
                .chain(NOTE_CLASSES)
                .chain(TASK_CLASSES)
                .map(|c| class_prefix(c))
                .collect();
            Some(Restriction::or(structured).negate())
        },
    }
}
