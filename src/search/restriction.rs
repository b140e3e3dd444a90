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

//! The restriction tree: the boolean query AST handed to the query
//! executor, and the combinators that keep it minimal.
//!
//! Trees are immutable value objects with no back-references. An `And`
//! with no children matches everything, an `Or` with no children matches
//! nothing; the combinators exploit both identities so that neither ever
//! appears as a child in a constructed tree, and no `And`/`Or` node ever
//! has exactly one child.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use chrono::NaiveDateTime;

use super::property::Property;

bitflags! {
    /// Bits of the `MessageFlags` property testable with
    /// `Restriction::Bitmask`.
    pub struct MessageFlags: u32 {
        const READ = 1 << 0;
        const HAS_ATTACH = 1 << 4;
    }
}

/// How a `Content` leaf matches its value against the property text.
#[derive(
    Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
pub enum MatchMode {
    Prefix,
    Substring,
    FullString,
}

/// The matching flags of a `Content` leaf.
#[derive(
    Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
pub struct TextMatch {
    pub mode: MatchMode,
    pub ignore_case: bool,
}

impl TextMatch {
    pub fn prefix(ignore_case: bool) -> Self {
        TextMatch {
            mode: MatchMode::Prefix,
            ignore_case,
        }
    }

    pub fn substring(ignore_case: bool) -> Self {
        TextMatch {
            mode: MatchMode::Substring,
            ignore_case,
        }
    }

    pub fn full_string(ignore_case: bool) -> Self {
        TextMatch {
            mode: MatchMode::FullString,
            ignore_case,
        }
    }
}

/// Relational operator of a `Compare` leaf, evaluated as
/// `<value-in-item> <relop> <value-in-leaf>`.
#[derive(
    Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
pub enum RelOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

/// Test applied to the masked bits of a `Bitmask` leaf.
#[derive(
    Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
pub enum BitOp {
    EqualToZero,
    NotEqualToZero,
}

/// A comparison value.
///
/// `Timestamp` values are naive local times; symbolic time ranges resolve
/// against the caller-supplied "now" in the same frame, so no zone
/// conversion happens inside the compiler.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
    Timestamp(NaiveDateTime),
}

/// A node of the restriction tree.
///
/// `And` and `Or` are n-ary; `Sub` applies its child to a nested
/// multi-valued table (e.g. the recipients of a message) rather than to
/// the item itself.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub enum Restriction {
    And(Vec<Restriction>),
    Or(Vec<Restriction>),
    Not(Box<Restriction>),
    Content {
        property: Property,
        flags: TextMatch,
        value: String,
    },
    Compare {
        property: Property,
        relop: RelOp,
        value: Value,
    },
    Bitmask {
        property: Property,
        relop: BitOp,
        mask: u32,
    },
    Exists {
        property: Property,
    },
    Sub {
        property: Property,
        child: Box<Restriction>,
    },
}

impl Restriction {
    /// The empty conjunction: matches every item.
    pub fn match_all() -> Self {
        Restriction::And(Vec::new())
    }

    /// The empty disjunction: matches no item.
    pub fn match_none() -> Self {
        Restriction::Or(Vec::new())
    }

    pub fn is_match_all(&self) -> bool {
        matches!(*self, Restriction::And(ref c) if c.is_empty())
    }

    pub fn is_match_none(&self) -> bool {
        matches!(*self, Restriction::Or(ref c) if c.is_empty())
    }

    pub fn content(
        property: Property,
        flags: TextMatch,
        value: impl Into<String>,
    ) -> Self {
        Restriction::Content {
            property,
            flags,
            value: value.into(),
        }
    }

    pub fn compare(property: Property, relop: RelOp, value: Value) -> Self {
        Restriction::Compare {
            property,
            relop,
            value,
        }
    }

    pub fn bitmask(property: Property, relop: BitOp, mask: u32) -> Self {
        Restriction::Bitmask {
            property,
            relop,
            mask,
        }
    }

    pub fn exists(property: Property) -> Self {
        Restriction::Exists { property }
    }

    pub fn sub(property: Property, child: Restriction) -> Self {
        Restriction::Sub {
            property,
            child: Box::new(child),
        }
    }

    /// Conjunction of `children`.
    ///
    /// Match-all children contribute nothing and are dropped; a match-none
    /// child makes the whole conjunction match nothing; a single surviving
    /// child is returned unwrapped.
    pub fn and(mut children: Vec<Restriction>) -> Self {
        if children.iter().any(Restriction::is_match_none) {
            return Restriction::match_none();
        }

        children.retain(|c| !c.is_match_all());
        if 1 == children.len() {
            children.pop().unwrap()
        } else {
            Restriction::And(children)
        }
    }

    /// Disjunction of `children`, with the dual collapse rules of
    /// [`Restriction::and`].
    pub fn or(mut children: Vec<Restriction>) -> Self {
        if children.iter().any(Restriction::is_match_all) {
            return Restriction::match_all();
        }

        children.retain(|c| !c.is_match_none());
        if 1 == children.len() {
            children.pop().unwrap()
        } else {
            Restriction::Or(children)
        }
    }

    /// Negation; double negation collapses.
    pub fn negate(self) -> Self {
        match self {
            Restriction::Not(inner) => *inner,
            other => Restriction::Not(Box::new(other)),
        }
    }
}
