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

//! Symbolic identifiers for the message-store properties the compiler can
//! reference.
//!
//! These are deliberately symbolic: the numeric property tags differ
//! between store generations, so mapping a `Property` to its wire tag is
//! the job of the host system's lookup table, not of this crate. The one
//! exception is [`Property::Categories`], which has no fixed tag at all and
//! is resolved by `(property set, name)` pair at request time.

use serde::{Deserialize, Serialize};

/// The property-set GUID (string form) for the common named properties,
/// which includes the category keywords list.
pub const PS_PUBLIC_STRINGS: &str = "00020329-0000-0000-c000-000000000046";

/// Recipient-type value for the To line.
pub const RECIPIENT_TO: i64 = 1;
/// Recipient-type value for the Cc line.
pub const RECIPIENT_CC: i64 = 2;

/// Flag-status value for a follow-up flag that was marked complete.
pub const FLAG_STATUS_COMPLETE: i64 = 1;
/// Flag-status value for an active follow-up flag.
pub const FLAG_STATUS_FLAGGED: i64 = 2;

/// A property a restriction leaf can test.
///
/// Every leaf node the compiler emits references exactly one of these.
#[derive(
    Deserialize,
    Serialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
pub enum Property {
    Subject,
    Body,
    MessageClass,

    // Recipient-table columns, addressable under a
    // `Restriction::Sub { property: MessageRecipients, .. }` node.
    DisplayName,
    EmailAddress,
    RecipientType,
    /// The recipients table itself (a sub-restriction target, never a
    /// leaf's own test subject).
    MessageRecipients,
    /// The rendered To line of the item.
    DisplayTo,

    SenderName,
    SenderEmail,

    CreationTime,
    LastModificationTime,
    MessageDeliveryTime,
    ClientSubmitTime,
    /// Set alongside a follow-up flag that carries a reply-by time.
    ReplyTime,
    ExpiryTime,
    DateCompleted,
    TaskDueDate,

    /// Start of a non-recurring appointment.
    AppointmentStart,
    /// End of a non-recurring appointment.
    AppointmentEnd,
    /// First occurrence of a recurring series.
    RecurrenceStart,
    /// Last occurrence of a recurring series.
    RecurrenceEnd,

    FlagStatus,
    FlagIcon,
    /// Task completion fraction, 0.0 through 1.0.
    PercentComplete,
    TaskStatus,

    /// Item size in bytes; the legacy 32-bit property.
    MessageSize,
    /// Item size in bytes; the extended property newer stores fill in.
    MessageSizeExtended,
    MessageFlags,
    Importance,

    // Contact fields.
    FileAs,
    GivenName,
    Surname,
    CompanyName,
    BusinessAddress,
    HomeAddress,
    OtherAddress,
    Email1Address,
    Email2Address,
    Email3Address,
    BusinessPhone,
    HomePhone,
    MobilePhone,

    /// The multi-valued category keywords list, a named property.
    Categories,
}

impl Property {
    /// The `(property set, name)` pair for named properties, `None` for
    /// properties with a well-known tag.
    pub fn named(self) -> Option<(&'static str, &'static str)> {
        match self {
            Property::Categories => Some((PS_PUBLIC_STRINGS, "Keywords")),
            _ => None,
        }
    }
}
