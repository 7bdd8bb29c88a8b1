/*
grid.rs

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

//! Working grid for one generation attempt.
//!
//! A [`Grid`] is created by applying a [`Mask`], then receives the words, and finally the filler
//! letters.
//! It is owned by a single attempt and dropped as a whole when the attempt fails.

use std::fmt;

use super::mask::Mask;
use super::orientation::Orientation;

/// Content of a cell.
///
/// - An `Open` cell can still receive a letter.
/// - A `Blocked` cell is outside the puzzle shape and never receives a letter.
/// - A `Letter` cell holds the letter of a word or a filler letter.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Open,
    Blocked,
    Letter(char),
}

/// Rectangular grid of cells, stored row by row.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Number of rows.
    nrows: usize,

    /// Number of columns.
    ncols: usize,

    /// Cells, row after row.
    cells: Vec<Cell>,
}

/// Print the grid for debugging: `*` for blocked cells and `.` for open cells.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.nrows {
            for col in 0..self.ncols {
                let c: char = match self.get(row, col) {
                    Cell::Open => '.',
                    Cell::Blocked => '*',
                    Cell::Letter(c) => c,
                };
                write!(f, "{c}")?;
            }
            if row + 1 < self.nrows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Grid {
    /// Create a grid of `nrows` by `ncols` open cells, and block the cells selected by the mask.
    pub fn new(nrows: usize, ncols: usize, mask: Mask) -> Self {
        let mut cells: Vec<Cell> = vec![Cell::Open; nrows * ncols];

        for row in 0..nrows {
            for col in 0..ncols {
                if mask.is_blocked(row, col, nrows, ncols) {
                    cells[row * ncols + col] = Cell::Blocked;
                }
            }
        }
        Self {
            nrows,
            ncols,
            cells,
        }
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Return the cell at the given position.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.ncols + col]
    }

    /// Whether the given cell can hold the letter `c`: it is open or it already contains the same
    /// letter.
    pub fn accepts(&self, row: usize, col: usize, c: char) -> bool {
        match self.get(row, col) {
            Cell::Open => true,
            Cell::Blocked => false,
            Cell::Letter(l) => l == c,
        }
    }

    /// Store a letter in an open cell, or in a cell that already holds that letter.
    ///
    /// Blocked cells are left untouched.
    pub fn set_letter(&mut self, row: usize, col: usize, c: char) {
        let cell: &mut Cell = &mut self.cells[row * self.ncols + col];
        debug_assert!(
            matches!(*cell, Cell::Open) || *cell == Cell::Letter(c),
            "conflicting letter {c} at ({row}, {col})"
        );
        if *cell != Cell::Blocked {
            *cell = Cell::Letter(c);
        }
    }

    /// Whether the letters fit when written from (`row`, `col`) in the given orientation.
    ///
    /// The starting position must come from [`Orientation::start_bounds`].
    pub fn fits(&self, letters: &[char], row: usize, col: usize, orientation: Orientation) -> bool {
        letters.iter().enumerate().all(|(i, c)| {
            let (r, c2) = orientation.step(row, col, i);
            self.accepts(r, c2, *c)
        })
    }

    /// Write the letters from (`row`, `col`) in the given orientation.
    pub fn write(&mut self, letters: &[char], row: usize, col: usize, orientation: Orientation) {
        for (i, c) in letters.iter().enumerate() {
            let (r, c2) = orientation.step(row, col, i);
            self.set_letter(r, c2, *c);
        }
    }

    /// Iterate over the positions of the open cells.
    pub fn open_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Open)
            .map(|(i, _)| (i / self.ncols, i % self.ncols))
    }

    /// Return the grid as rows of characters, with blank (space) characters for the open and the
    /// blocked cells.
    pub fn render(&self) -> Vec<Vec<char>> {
        self.cells
            .chunks(self.ncols.max(1))
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Letter(c) => *c,
                        Cell::Open | Cell::Blocked => ' ',
                    })
                    .collect()
            })
            .collect()
    }
}
