/*
filler.rs

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

//! Fill the remaining cells with random letters.

use rand::Rng;
use rand::seq::IndexedRandom;

use super::grid::Grid;
use crate::config::ALPHABET;

/// Fill the open cells of the grid with random letters.
///
/// Return the filled grid and the solution, which is a copy of the grid before filling: only the
/// letters of the placed words are present in the solution.
pub fn fill<R: Rng + ?Sized>(mut grid: Grid, rng: &mut R) -> (Grid, Grid) {
    let solution: Grid = grid.clone();
    let open: Vec<(usize, usize)> = grid.open_cells().collect();

    for (row, col) in open {
        if let Some(&c) = ALPHABET.choose(rng) {
            grid.set_letter(row, col, c as char);
        }
    }
    (grid, solution)
}
