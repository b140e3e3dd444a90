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

//! The criteria-to-restriction compiler.
//!
//! Data flows one way: a [`criteria::Criteria`] value is validated and fed
//! through the per-concern builders in [`build`], which use the relative
//! date resolver in [`dates`] and assemble their output with the
//! combinators on [`restriction::Restriction`]; [`compile`] orchestrates
//! the whole pass.

pub mod build;
pub mod compile;
pub mod criteria;
pub mod dates;
pub mod property;
pub mod restriction;
