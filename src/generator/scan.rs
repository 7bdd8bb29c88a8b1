/*
scan.rs

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

//! Search words in a rendered grid.
//!
//! The search follows the same four orientations as the placement.
//! Because the filler uses random letters, a word can appear more than once in the final grid.

use super::orientation::Orientation;
use super::placement::Placement;

/// Whether the letters are present from (`row`, `col`) in the given orientation.
fn matches(
    grid: &[Vec<char>],
    letters: &[char],
    row: usize,
    col: usize,
    orientation: Orientation,
) -> bool {
    letters.iter().enumerate().all(|(i, c)| {
        let (r, c2) = orientation.step(row, col, i);
        grid.get(r).and_then(|line| line.get(c2)) == Some(c)
    })
}

/// Return all the occurrences of the word in the grid.
///
/// The width of the grid is the length of its first row. Cells missing from shorter rows never
/// match.
///
/// If `backwards` is set, then the word is also searched in reverse order. A palindrome found at a
/// position is only reported once.
pub fn find(grid: &[Vec<char>], word: &str, backwards: bool) -> Vec<Placement> {
    let nrows: usize = grid.len();
    let ncols: usize = grid.first().map_or(0, |r| r.len());
    let letters: Vec<char> = word.chars().collect();
    let reversed_letters: Vec<char> = letters.iter().rev().copied().collect();
    let mut found: Vec<Placement> = Vec::new();

    for orientation in Orientation::ALL {
        let Some((rows, cols)) = orientation.start_bounds(letters.len(), nrows, ncols) else {
            continue;
        };

        for row in rows {
            for col in cols.clone() {
                let reversed: bool = if matches(grid, &letters, row, col, orientation) {
                    false
                } else if backwards && matches(grid, &reversed_letters, row, col, orientation) {
                    true
                } else {
                    continue;
                };
                found.push(Placement {
                    word: word.to_string(),
                    row,
                    col,
                    orientation,
                    reversed,
                });
            }
        }
    }
    found
}

/// Return the number of times the word is present in the grid.
pub fn count(grid: &[Vec<char>], word: &str, backwards: bool) -> usize {
    find(grid, word, backwards).len()
}
