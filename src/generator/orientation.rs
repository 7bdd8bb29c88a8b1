/*
orientation.rs

Copyright 2025 Hervé Quatremain
Portions copyright Pat Jensen, used under the BSD-2-Clause license (see NOTICE)

This file is part of Wordsearch.

Wordsearch is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordsearch is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordsearch. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Directions along which the letters of a word are laid out.

use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;

/// Word orientation, as a column step (`dx`) and a row step (`dy`).
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Orientation {
    /// `(dx, dy) = (0, 1)`
    Down,
    /// `(dx, dy) = (1, 0)`
    Right,
    /// `(dx, dy) = (1, 1)`
    DownRight,
    /// `(dx, dy) = (1, -1)`
    UpRight,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Orientation::Down => write!(f, "down"),
            Orientation::Right => write!(f, "right"),
            Orientation::DownRight => write!(f, "down-right"),
            Orientation::UpRight => write!(f, "up-right"),
        }
    }
}

impl Orientation {
    /// The four orientations.
    pub const ALL: [Orientation; 4] = [
        Orientation::Down,
        Orientation::Right,
        Orientation::DownRight,
        Orientation::UpRight,
    ];

    /// Column step.
    pub fn dx(&self) -> isize {
        match self {
            Orientation::Down => 0,
            _ => 1,
        }
    }

    /// Row step.
    pub fn dy(&self) -> isize {
        match self {
            Orientation::Right => 0,
            Orientation::UpRight => -1,
            _ => 1,
        }
    }

    /// Coordinates of the `step`-th cell of a word starting at (`row`, `col`).
    ///
    /// The caller must only use positions returned by [`Orientation::start_bounds`], so that the
    /// word does not run off the grid.
    pub fn step(&self, row: usize, col: usize, step: usize) -> (usize, usize) {
        (
            row.wrapping_add_signed(self.dy() * step as isize),
            col.wrapping_add_signed(self.dx() * step as isize),
        )
    }

    /// Return the row and column ranges of the starting positions for a word of `len` letters,
    /// or `None` if the word cannot fit in that orientation.
    pub fn start_bounds(
        &self,
        len: usize,
        nrows: usize,
        ncols: usize,
    ) -> Option<(RangeInclusive<usize>, RangeInclusive<usize>)> {
        if len == 0 || nrows == 0 || ncols == 0 {
            return None;
        }

        let col_max: usize = if self.dx() != 0 {
            ncols.checked_sub(len)?
        } else {
            ncols - 1
        };

        // Upward words start at the bottom, so the first row must leave room above it
        let (row_min, row_max): (usize, usize) = if self.dy() >= 0 {
            (0, nrows.checked_sub(len)?)
        } else {
            (len - 1, nrows - 1)
        };

        if row_min > row_max {
            return None;
        }
        Some((row_min..=row_max, 0..=col_max))
    }
}
