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

//! The read/attachment/importance/flag selections, plus the task-status
//! filter.
//!
//! Read state and attachment presence are bits of the message-flags
//! property, hence the bitmask leaves. The follow-up flag choices are
//! fixed shapes over the flag-status, flag-icon, reply-time and
//! percent-complete properties; "no flag" negates the union of the other
//! three plus a carve-out for task items, which carry their completion
//! state in task properties rather than in a follow-up flag.

use crate::search::build::item_type::class_prefix;
use crate::search::criteria::{
    AttachmentState, FlagQuery, ReadStatus, SelectionCriteria,
    TaskStatusFilter,
};
use crate::search::property::{
    Property, FLAG_STATUS_COMPLETE, FLAG_STATUS_FLAGGED,
};
use crate::search::restriction::{
    BitOp, MessageFlags, RelOp, Restriction, Value,
};

fn flag_status_is(status: i64) -> Restriction {
    Restriction::compare(
        Property::FlagStatus,
        RelOp::Eq,
        Value::Int(status),
    )
}

fn marked_completed() -> Restriction {
    Restriction::or(vec![
        flag_status_is(FLAG_STATUS_COMPLETE),
        Restriction::compare(
            Property::PercentComplete,
            RelOp::Eq,
            Value::Float(1.0),
        ),
    ])
}

fn flagged_by_me() -> Restriction {
    Restriction::and(vec![
        flag_status_is(FLAG_STATUS_FLAGGED),
        Restriction::exists(Property::FlagIcon),
    ])
}

/// A flag someone else put on the message: active, carries the sender's
/// reply-by time, but no icon of our own.
fn flagged_by_other() -> Restriction {
    Restriction::and(vec![
        flag_status_is(FLAG_STATUS_FLAGGED),
        Restriction::exists(Property::ReplyTime),
        Restriction::exists(Property::FlagIcon).negate(),
    ])
}

fn flag_query(flag: FlagQuery) -> Restriction {
    match flag {
        FlagQuery::MarkedCompleted => marked_completed(),
        FlagQuery::FlaggedByMe => flagged_by_me(),
        FlagQuery::FlaggedByOther => flagged_by_other(),
        FlagQuery::NoFlag => Restriction::or(vec![
            marked_completed(),
            flagged_by_me(),
            flagged_by_other(),
            class_prefix("IPM.Task"),
        ])
        .negate(),
    }
}

/// Build the combined selection predicate, `None` when nothing is
/// selected.
pub fn selection(criteria: &SelectionCriteria) -> Option<Restriction> {
    let mut parts = Vec::new();

    if let Some(read) = criteria.read_status {
        let relop = match read {
            ReadStatus::Unread => BitOp::EqualToZero,
            ReadStatus::Read => BitOp::NotEqualToZero,
        };
        parts.push(Restriction::bitmask(
            Property::MessageFlags,
            relop,
            MessageFlags::READ.bits(),
        ));
    }

    if let Some(attachment) = criteria.attachment {
        let relop = match attachment {
            AttachmentState::With => BitOp::NotEqualToZero,
            AttachmentState::Without => BitOp::EqualToZero,
        };
        parts.push(Restriction::bitmask(
            Property::MessageFlags,
            relop,
            MessageFlags::HAS_ATTACH.bits(),
        ));
    }

    if let Some(importance) = criteria.importance {
        parts.push(Restriction::compare(
            Property::Importance,
            RelOp::Eq,
            Value::Int(importance as i64),
        ));
    }

    if let Some(flag) = criteria.flag {
        parts.push(flag_query(flag));
    }

    if parts.is_empty() {
        None
    } else {
        Some(Restriction::and(parts))
    }
}

/// Build the task-status predicate; the orchestrator only invokes this
/// for task searches.
pub fn task_status(status: Option<TaskStatusFilter>) -> Option<Restriction> {
    status.map(|s| {
        Restriction::compare(
            Property::TaskStatus,
            RelOp::Eq,
            Value::Int(s as i64),
        )
    })
}
