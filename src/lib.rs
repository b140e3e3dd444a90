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

//! Restriq compiles the selections a groupware client gathers from its
//! "Advanced Find" form — item type, free text, attendees, a time window,
//! categories, read/attachment/importance/flag state, size — into the
//! boolean restriction tree that a remote message store evaluates.
//!
//! The compiler is a pure, synchronous function over an explicit
//! [`Criteria`] value. It performs no I/O and holds no state between
//! invocations; the caller supplies the "now" reference used to resolve
//! symbolic time ranges such as "last week", which makes every compilation
//! deterministic and testable.
//!
//! ```
//! use chrono::NaiveDate;
//! use restriq::{compile, Criteria};
//!
//! let now = NaiveDate::from_ymd_opt(2024, 6, 12)
//!     .unwrap()
//!     .and_hms_opt(9, 30, 0)
//!     .unwrap();
//! let restriction = compile(&Criteria::default(), now).unwrap();
//! // No constraints selected: the tree matches everything.
//! assert!(restriction.is_match_all());
//! ```

#[cfg(test)]
macro_rules! assert_matches {
    ($expected:pat, $actual:expr) => {
        match $actual {
            $expected => (),
            unexpected => panic!(
                "Expected {} matches {}, got {:?}",
                stringify!($expected),
                stringify!($actual),
                unexpected
            ),
        }
    };
}

pub mod search;
pub mod support;

pub use crate::search::compile::compile;
pub use crate::search::criteria::Criteria;
pub use crate::search::restriction::Restriction;
pub use crate::support::error::ValidationError;
