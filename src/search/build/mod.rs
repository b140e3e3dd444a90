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

//! The per-concern predicate builders.
//!
//! Each builder is a pure function over its slice of the criteria,
//! returning `None` when that slice imposes no constraint. Only the time
//! and size builders can fail; their errors abort the whole compilation.

pub mod attendees;
pub mod categories;
pub mod item_type;
pub mod selection;
pub mod size;
pub mod text;
pub mod time;
