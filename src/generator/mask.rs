/*
mask.rs

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

//! Masks that shape the visible outline of the puzzle.
//!
//! A mask marks the cells where no letter can be placed, neither by a word nor by the filler.
//! The grid storage stays rectangular: masked cells are simply displayed as blanks.

use clap::ValueEnum;
use strum_macros::Display;

/// Shape of the puzzle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Display, Default)]
#[strum(serialize_all = "lowercase")]
pub enum Mask {
    /// Use the whole rectangle.
    #[default]
    None,

    /// Disc centered in the grid.
    Circle,

    /// Two overlapping squares, with notches cut in the middle of each edge.
    Squares,
}

impl Mask {
    /// Whether the cell at row `row` and column `col` is blocked in a grid of `nrows` rows and
    /// `ncols` columns.
    pub fn is_blocked(&self, row: usize, col: usize, nrows: usize, ncols: usize) -> bool {
        let (i, j) = (row as i64, col as i64);
        let (nrows, ncols) = (nrows as i64, ncols as i64);
        let cy: i64 = nrows / 2;
        let cx: i64 = ncols / 2;

        match self {
            Mask::None => false,
            Mask::Circle => {
                let r2: i64 = nrows.min(ncols).pow(2) / 4;
                (i - cy).pow(2) + (j - cx).pow(2) > r2
            }
            Mask::Squares => {
                let a: i64 = (0.38 * nrows.min(ncols) as f64) as i64;

                // Notches at the top and bottom edges
                (a <= j && j < ncols - a && (i < cy - a || i > cy + a))
                    // Notches at the left and right edges
                    || (a <= i && i < nrows - a && (j < cx - a || j > cx + a))
            }
        }
    }
}
