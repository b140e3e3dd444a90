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

//! Helper trait which restores non-deprecated panicking methods (with 'x'
//! appended to disambiguate) for things that are obviously infallible,
//! since Chrono decided to make everything super noisy instead.

use chrono::prelude::*;

pub trait NaiveDateX {
    fn from_ymdx(y: i32, m: u32, d: u32) -> Self;
    fn and_hmsx(&self, h: u32, m: u32, s: u32) -> NaiveDateTime;
    /// Local midnight at the start of this date.
    fn at_midnight(&self) -> NaiveDateTime;
}

impl NaiveDateX for NaiveDate {
    fn from_ymdx(y: i32, m: u32, d: u32) -> Self {
        Self::from_ymd_opt(y, m, d).unwrap()
    }

    fn and_hmsx(&self, h: u32, m: u32, s: u32) -> NaiveDateTime {
        self.and_hms_opt(h, m, s).unwrap()
    }

    fn at_midnight(&self) -> NaiveDateTime {
        self.and_hmsx(0, 0, 0)
    }
}
