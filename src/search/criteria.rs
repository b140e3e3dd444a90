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

//! The criteria value an Advanced Find form collects.
//!
//! The UI layer assembles one `Criteria` per "start search" and hands it to
//! [`crate::search::compile::compile`] exactly once; it is never mutated
//! afterwards. Every field defaults to "no constraint", so
//! `Criteria::default()` is the legal (and common) "match everything"
//! search.
//!
//! Two kinds of field keep their raw form-field text instead of a parsed
//! value: explicit date bounds and size bounds. Their parse failures are
//! part of the compiler's reportable-error contract, so parsing them
//! belongs here rather than in the UI layer.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Which kind of item the search targets.
///
/// Selects the message-class filter and gates the builders that only make
/// sense for one kind (e.g. the task-status filter).
#[derive(
    Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
pub enum ItemTypeScheme {
    AnyItem,
    Appointments,
    Contacts,
    Messages,
    Notes,
    Tasks,
}

impl Default for ItemTypeScheme {
    fn default() -> Self {
        ItemTypeScheme::AnyItem
    }
}

/// Which properties a free-text query searches.
#[derive(
    Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
pub enum TextScope {
    SubjectOnly,
    SubjectAndBody,
    FileAsOnly,
    NameFields,
    CompanyOnly,
    AddressFields,
    EmailFields,
    PhoneFields,
    ContentsOnly,
}

impl Default for TextScope {
    fn default() -> Self {
        TextScope::SubjectOnly
    }
}

#[derive(
    Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq,
)]
pub struct FreeText {
    pub query: String,
    pub scope: TextScope,
}

/// Where the mailbox owner must appear on the recipient lines.
#[derive(
    Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
pub enum OwnerPlacement {
    /// The only name on the To line.
    OnlyToLine,
    OnToLine,
    OnCcLine,
}

/// The people-related fields of the form.
///
/// Each address field holds `;`-separated `Name <email>` or bare-email
/// tokens exactly as typed (or as inserted by the address-book picker).
#[derive(
    Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq,
)]
pub struct AttendeeCriteria {
    pub organizer: Option<String>,
    pub attendees: Option<String>,
    pub from: Option<String>,
    pub sent_to: Option<String>,
    pub email: Option<String>,
    pub placement: Option<OwnerPlacement>,
}

/// Which timestamp property the time window applies to.
#[derive(
    Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
pub enum TimeProperty {
    None,
    Created,
    Modified,
    Received,
    Sent,
    Due,
    Starts,
    Ends,
    Expires,
    Completed,
}

impl Default for TimeProperty {
    fn default() -> Self {
        TimeProperty::None
    }
}

/// A symbolic, user-facing time window token.
#[derive(
    Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
pub enum TimeRange {
    AnyTime,
    Yesterday,
    Today,
    Tomorrow,
    Last7Days,
    Next7Days,
    LastWeek,
    ThisWeek,
    NextWeek,
    LastMonth,
    ThisMonth,
    NextMonth,
    ExplicitRange,
}

impl Default for TimeRange {
    fn default() -> Self {
        TimeRange::AnyTime
    }
}

#[derive(
    Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq,
)]
pub struct TimeCriteria {
    pub property: TimeProperty,
    pub range: TimeRange,
    /// Raw form text, consulted only when `range` is `ExplicitRange`.
    pub explicit_start: Option<String>,
    pub explicit_end: Option<String>,
}

/// Task status filter values, in the store's own numbering.
///
/// The form's "doesn't matter" choice maps to `None` at the criteria
/// level rather than to a variant here.
#[derive(
    Deserialize_repr,
    Serialize_repr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[repr(u8)]
pub enum TaskStatusFilter {
    NotStarted = 0,
    InProgress = 1,
    Completed = 2,
    Waiting = 3,
    Deferred = 4,
}

#[derive(
    Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
pub enum ReadStatus {
    Unread,
    Read,
}

#[derive(
    Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
pub enum AttachmentState {
    With,
    Without,
}

/// Importance levels, in the store's own numbering.
///
/// The form's "doesn't matter" sentinel (-1) maps to `None` at the
/// criteria level.
#[derive(
    Deserialize_repr,
    Serialize_repr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[repr(u8)]
pub enum Importance {
    Low = 0,
    Normal = 1,
    High = 2,
}

/// Follow-up flag filter choices.
#[derive(
    Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
pub enum FlagQuery {
    MarkedCompleted,
    FlaggedByOther,
    NoFlag,
    FlaggedByMe,
}

/// The independent checkbox/dropdown selections of the form.
#[derive(
    Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
pub struct SelectionCriteria {
    pub read_status: Option<ReadStatus>,
    pub attachment: Option<AttachmentState>,
    pub importance: Option<Importance>,
    pub flag: Option<FlagQuery>,
}

#[derive(
    Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
pub enum SizeComparator {
    Equals,
    Between,
    LessThan,
    GreaterThan,
}

/// A size constraint in kilobytes, bounds kept as raw form text.
#[derive(
    Deserialize, Serialize, Clone, Debug, PartialEq, Eq,
)]
pub struct SizeCriteria {
    pub comparator: SizeComparator,
    pub value1: String,
    /// Second bound, required for `Between`.
    pub value2: Option<String>,
}

/// Everything an Advanced Find invocation searches on.
#[derive(
    Deserialize, Serialize, Clone, Debug, Default, PartialEq,
)]
pub struct Criteria {
    pub item_type: ItemTypeScheme,
    pub free_text: FreeText,
    pub attendees: AttendeeCriteria,
    pub time: TimeCriteria,
    /// Category names; the builder deduplicates case-insensitively.
    pub categories: Vec<String>,
    /// Only consulted when `item_type` is `Tasks`.
    pub task_status: Option<TaskStatusFilter>,
    pub selection: SelectionCriteria,
    pub size: Option<SizeCriteria>,
    /// When set, free-text and category matching is case-sensitive.
    pub match_case: bool,
}
