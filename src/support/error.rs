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

use thiserror::Error;

/// An error detected while compiling criteria into a restriction.
///
/// Validation is fail-fast: the first error aborts compilation and no
/// partial restriction is ever produced. Absent or empty criteria fields
/// are never errors; they simply contribute no constraint.
///
/// `field` names the offending form field in UI terms ("start date",
/// "size value", ...) so the caller can re-prompt the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// An explicit date bound failed to parse, or the end of the range
    /// precedes its start.
    #[error("invalid date range: {field}")]
    InvalidDateRange { field: &'static str },
    /// A size bound is not an unsigned number of kilobytes.
    #[error("invalid size value: {field}")]
    InvalidSizeValue { field: &'static str },
}
