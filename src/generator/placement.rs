/*
placement.rs

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

//! Place the words in the grid.
//!
//! Words are placed one after the other. For each word, the orientations are tried in a random
//! order, and for the first orientation that has at least one candidate position, a random
//! candidate is selected and the word is written.
//! When a word cannot be placed, the whole attempt is abandoned: previously placed words are not
//! moved.

use log::{Level, debug, log_enabled};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::Serialize;

use super::grid::Grid;
use super::orientation::Orientation;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum PlacementError {
    /// No candidate position for the word in any orientation.
    NoRoom(String),
}

/// Position of a word in the grid.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Word as provided by the caller.
    pub word: String,

    /// Row of the first letter written in the grid.
    pub row: usize,

    /// Column of the first letter written in the grid.
    pub col: usize,

    /// Direction of the letters in the grid.
    pub orientation: Orientation,

    /// Whether the word has been written backwards. In that case, the first letter written at
    /// ([`Placement::row`], [`Placement::col`]) is the last letter of the word.
    pub reversed: bool,
}

impl Placement {
    /// Return the grid positions of the letters, in the order they have been written.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        (0..self.word.chars().count())
            .map(|i| self.orientation.step(self.row, self.col, i))
            .collect()
    }
}

/// Return all the starting positions where the letters fit in the given orientation.
pub fn candidates(grid: &Grid, letters: &[char], orientation: Orientation) -> Vec<(usize, usize)> {
    let Some((rows, cols)) = orientation.start_bounds(letters.len(), grid.nrows(), grid.ncols())
    else {
        return Vec::new();
    };

    let mut candidates: Vec<(usize, usize)> = Vec::new();
    for row in rows {
        for col in cols.clone() {
            if grid.fits(letters, row, col, orientation) {
                candidates.push((row, col));
            }
        }
    }
    candidates
}

/// Place a word at a random position and return that position.
///
/// If `backwards` is set, then before trying each orientation, a coin is tossed to decide
/// whether to reverse the letters. The decision applies to the letters as left by the previous
/// orientation, so successive reversals cancel each other.
pub fn place_word<R: Rng + ?Sized>(
    grid: &mut Grid,
    word: &str,
    backwards: bool,
    rng: &mut R,
) -> Result<Placement, PlacementError> {
    let mut orientations: [Orientation; 4] = Orientation::ALL;
    orientations.shuffle(rng);

    let mut letters: Vec<char> = word.chars().collect();
    let mut reversed: bool = false;

    for orientation in orientations {
        if backwards && rng.random_bool(0.5) {
            letters.reverse();
            reversed = !reversed;
        }

        let positions: Vec<(usize, usize)> = candidates(grid, &letters, orientation);
        let Some(&(row, col)) = positions.choose(rng) else {
            debug!("    {word}: no candidate going {orientation}");
            continue;
        };

        debug!(
            "    {word}: {} candidate(s) going {orientation}, selecting ({row}, {col}){}",
            positions.len(),
            if reversed { " reversed" } else { "" }
        );
        grid.write(&letters, row, col, orientation);
        return Ok(Placement {
            word: word.to_string(),
            row,
            col,
            orientation,
            reversed,
        });
    }
    Err(PlacementError::NoRoom(word.to_string()))
}

/// Place all the words, in the given order.
///
/// The words must not contain spaces (see [`super::wordsearch::prepare_words`]).
/// The grid is consumed. On success, it is returned with the words written in it.
pub fn place_words<R: Rng + ?Sized>(
    mut grid: Grid,
    words: &[String],
    backwards: bool,
    rng: &mut R,
) -> Result<(Grid, Vec<Placement>), PlacementError> {
    let mut placements: Vec<Placement> = Vec::with_capacity(words.len());

    for word in words {
        placements.push(place_word(&mut grid, word, backwards, rng)?);
    }

    if log_enabled!(Level::Debug) {
        debug!("Placed words:");
        for line in grid.to_string().lines() {
            debug!("    {line}");
        }
    }
    Ok((grid, placements))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::generator::grid::Cell;
    use crate::generator::mask::Mask;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn chars(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    #[test]
    fn candidate_positions() {
        let mut grid: Grid = Grid::new(3, 3, Mask::None);
        grid.write(&chars("XYZ"), 1, 0, Orientation::Right);

        // Only the middle column goes through the Y
        assert_eq!(
            candidates(&grid, &chars("AYB"), Orientation::Down),
            vec![(0, 1)]
        );
        assert_eq!(
            candidates(&grid, &chars("ABC"), Orientation::Right),
            vec![(0, 0), (2, 0)]
        );
        assert!(candidates(&grid, &chars("AXC"), Orientation::UpRight).is_empty());
        assert_eq!(
            candidates(&grid, &chars("AYC"), Orientation::UpRight),
            vec![(2, 0)]
        );
        assert!(candidates(&grid, &chars("ABCD"), Orientation::Right).is_empty());
    }

    #[test]
    fn placement_is_recorded() {
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        let mut grid: Grid = Grid::new(4, 4, Mask::None);

        let placement: Placement = place_word(&mut grid, "WORD", false, &mut rng).unwrap();

        assert!(!placement.reversed);
        for (i, (row, col)) in placement.cells().into_iter().enumerate() {
            assert_eq!(grid.get(row, col), Cell::Letter("WORD".as_bytes()[i] as char));
        }
    }

    #[test]
    fn backwards_placement_is_recorded() {
        let mut rng: StdRng = StdRng::seed_from_u64(3);

        for _ in 0..20 {
            let mut grid: Grid = Grid::new(5, 5, Mask::None);
            let placement: Placement = place_word(&mut grid, "ABCDE", true, &mut rng).unwrap();
            let expected: Vec<char> = if placement.reversed {
                chars("EDCBA")
            } else {
                chars("ABCDE")
            };

            let written: Vec<char> = placement
                .cells()
                .into_iter()
                .map(|(row, col)| match grid.get(row, col) {
                    Cell::Letter(c) => c,
                    _ => ' ',
                })
                .collect();
            assert_eq!(written, expected);
        }
    }

    #[test]
    fn no_room() {
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        let grid: Grid = Grid::new(2, 2, Mask::Circle);
        let words: Vec<String> = vec!["AB".to_string(), "CD".to_string()];

        assert_eq!(
            place_words(grid, &words, false, &mut rng).unwrap_err(),
            PlacementError::NoRoom("CD".to_string())
        );
    }
}
