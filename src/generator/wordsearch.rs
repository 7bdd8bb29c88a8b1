/*
wordsearch.rs

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

//! Generate a word search puzzle.
//!
//! An attempt builds a fresh grid, places the words, and fills the remaining cells.
//! Because the orientations and positions are selected randomly, an attempt might fail even though
//! the words could fit. In that case the attempt is thrown away and a new one starts, up to
//! [`Settings::attempts`] times.
//! Words are never moved once placed: there is no backtracking inside an attempt.

use log::debug;
use rand::Rng;
use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::time::Instant;

use super::filler;
use super::grid::Grid;
use super::mask::Mask;
use super::placement::{self, Placement, PlacementError};
use crate::config::{DEFAULT_ATTEMPTS, DEFAULT_SIZE, NMAX};

/// Type of errors.
///
/// All the errors but [`GenerateError::AttemptsExhausted`] are detected before the first attempt.
#[derive(Debug, PartialEq)]
pub enum GenerateError {
    /// The number of rows or columns is zero or greater than [`NMAX`].
    BadDimensions(usize, usize),

    /// The number of attempts is zero.
    NoAttempts,

    /// No words to place.
    EmptyWordList,

    /// A word has no letters.
    EmptyWord,

    /// A word contains a character that is not an uppercase ASCII letter.
    InvalidLetter(String, char),

    /// A word is longer than the largest dimension of the grid.
    WordTooLong(String, usize),

    /// The words could not be placed in the given number of attempts.
    AttemptsExhausted(usize),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenerateError::BadDimensions(nrows, ncols) => write!(
                f,
                "Invalid grid size {nrows}x{ncols}: the number of rows and columns must be between 1 and {NMAX}"
            ),
            GenerateError::NoAttempts => write!(f, "The number of attempts must be at least 1"),
            GenerateError::EmptyWordList => write!(f, "The word list is empty"),
            GenerateError::EmptyWord => write!(f, "The word list contains an empty word"),
            GenerateError::InvalidLetter(word, c) => {
                write!(f, "Word {word} contains an invalid character '{c}'")
            }
            GenerateError::WordTooLong(word, max) => write!(
                f,
                "Word list contains a word with too many letters: {word}. The maximum is {max}"
            ),
            GenerateError::AttemptsExhausted(attempts) => write!(
                f,
                "I failed to place all the words after {attempts} attempts"
            ),
        }
    }
}

impl Error for GenerateError {}

/// Generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Number of rows.
    pub nrows: usize,

    /// Number of columns.
    pub ncols: usize,

    /// Whether words can be written backwards.
    pub backwards: bool,

    /// Shape of the puzzle.
    pub mask: Mask,

    /// Maximum number of attempts.
    pub attempts: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            nrows: DEFAULT_SIZE,
            ncols: DEFAULT_SIZE,
            backwards: false,
            mask: Mask::None,
            attempts: DEFAULT_ATTEMPTS,
        }
    }
}

impl Settings {
    /// Verify the settings and the words before trying to build the puzzle.
    ///
    /// # Errors
    ///
    /// The method returns the first configuration error found.
    pub fn check(&self, words: &[String]) -> Result<(), GenerateError> {
        if self.attempts == 0 {
            return Err(GenerateError::NoAttempts);
        }
        if !(1..=NMAX).contains(&self.nrows) || !(1..=NMAX).contains(&self.ncols) {
            return Err(GenerateError::BadDimensions(self.nrows, self.ncols));
        }
        if words.is_empty() {
            return Err(GenerateError::EmptyWordList);
        }

        let max_word_len: usize = self.nrows.max(self.ncols);
        for word in words {
            if word.is_empty() {
                return Err(GenerateError::EmptyWord);
            }
            if let Some(c) = word.chars().find(|c| !c.is_ascii_uppercase()) {
                return Err(GenerateError::InvalidLetter(word.clone(), c));
            }
            if word.len() > max_word_len {
                return Err(GenerateError::WordTooLong(word.clone(), max_word_len));
            }
        }
        Ok(())
    }
}

/// Generated puzzle.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WordSearch {
    /// Words to find, longest first.
    pub words: Vec<String>,

    /// Puzzle grid, row by row. Cells outside the mask are blank (space).
    pub grid: Vec<Vec<char>>,

    /// Solution grid: only the letters of the words, all other cells are blank.
    pub solution: Vec<Vec<char>>,

    /// Position of each word, in the order of [`WordSearch::words`].
    pub placements: Vec<Placement>,

    /// Number of attempts it took to generate the puzzle.
    pub attempts: usize,

    /// Duration in seconds it took to generate the puzzle.
    #[serde(skip)]
    pub duration: f32,
}

/// Print the grid, an empty line, and the list of words.
impl fmt::Display for WordSearch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_rows(f, &self.grid)?;
        writeln!(f)?;
        for word in &self.words {
            writeln!(f, "{word}")?;
        }
        Ok(())
    }
}

/// Print each row with its letters separated by a space.
pub fn write_rows(f: &mut impl fmt::Write, rows: &[Vec<char>]) -> fmt::Result {
    for row in rows {
        let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        writeln!(f, "{}", line.join(" "))?;
    }
    Ok(())
}

/// Remove the spaces from the words and sort them by decreasing length.
///
/// Words of the same length keep their relative order.
pub fn prepare_words(words: &[String]) -> Vec<String> {
    let mut words: Vec<String> = words.iter().map(|w| w.replace(' ', "")).collect();
    words.sort_by_key(|w| std::cmp::Reverse(w.len()));
    words
}

/// Build a word search puzzle.
///
/// # Errors
///
/// The function returns a configuration error, without trying to place any word, when the
/// settings or the words are invalid (see [`Settings::check`]).
/// It returns [`GenerateError::AttemptsExhausted`] when the words could not be placed after
/// [`Settings::attempts`] attempts.
pub fn generate<R: Rng + ?Sized>(
    settings: &Settings,
    words: &[String],
    rng: &mut R,
) -> Result<WordSearch, GenerateError> {
    generate_with(settings, words, rng, |_| ())
}

/// Build a word search puzzle, calling `on_attempt` with the attempt number at the start of each
/// attempt.
pub(crate) fn generate_with<R, F>(
    settings: &Settings,
    words: &[String],
    rng: &mut R,
    mut on_attempt: F,
) -> Result<WordSearch, GenerateError>
where
    R: Rng + ?Sized,
    F: FnMut(usize),
{
    let words: Vec<String> = prepare_words(words);
    settings.check(&words)?;

    let start: Instant = Instant::now();
    debug!(
        "Generating a {}x{} grid (mask = {}, backwards = {}) for {} words",
        settings.nrows,
        settings.ncols,
        settings.mask,
        settings.backwards,
        words.len()
    );

    for attempt in 1..=settings.attempts {
        debug!("== Attempt {attempt}");
        on_attempt(attempt);

        let grid: Grid = Grid::new(settings.nrows, settings.ncols, settings.mask);
        match placement::place_words(grid, &words, settings.backwards, rng) {
            Ok((grid, placements)) => {
                let (grid, solution) = filler::fill(grid, rng);
                let duration: f32 = start.elapsed().as_secs_f32();
                debug!("Fitted the words in {attempt} attempt(s) ({duration}s)");

                return Ok(WordSearch {
                    words,
                    grid: grid.render(),
                    solution: solution.render(),
                    placements,
                    attempts: attempt,
                    duration,
                });
            }
            Err(PlacementError::NoRoom(word)) => {
                debug!("    Back: no room left for {word}");
            }
        }
    }
    Err(GenerateError::AttemptsExhausted(settings.attempts))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::generator::orientation::Orientation;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    /// Random generator that counts the values it produces.
    struct CountingRng {
        inner: StdRng,
        draws: usize,
    }

    impl CountingRng {
        fn new(seed: u64) -> Self {
            Self {
                inner: StdRng::seed_from_u64(seed),
                draws: 0,
            }
        }
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.draws += 1;
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.draws += 1;
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            self.draws += 1;
            self.inner.fill_bytes(dst);
        }
    }

    fn to_strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn settings(nrows: usize, ncols: usize, mask: Mask, backwards: bool) -> Settings {
        Settings {
            nrows,
            ncols,
            backwards,
            mask,
            ..Settings::default()
        }
    }

    #[test]
    fn small_grid() {
        let mut rng: StdRng = StdRng::seed_from_u64(2025);
        let puzzle: WordSearch = generate(
            &settings(5, 5, Mask::None, false),
            &to_strings(&["CAT", "DOG"]),
            &mut rng,
        )
        .unwrap();

        assert_eq!(puzzle.grid.len(), 5);
        for row in &puzzle.grid {
            assert_eq!(row.len(), 5);
            assert!(row.iter().all(|c| c.is_ascii_uppercase()));
        }
        // The two words have no letter in common, so they cannot overlap
        let solution_letters: usize = puzzle
            .solution
            .iter()
            .flatten()
            .filter(|c| **c != ' ')
            .count();
        assert_eq!(solution_letters, 6);
        assert_eq!(puzzle.placements.len(), 2);
        assert!(puzzle.attempts >= 1 && puzzle.attempts <= DEFAULT_ATTEMPTS);
    }

    #[test]
    fn same_seed_same_puzzle() {
        let words: Vec<String> = to_strings(&["MERCURY", "VENUS", "EARTH", "MARS"]);
        let settings: Settings = settings(9, 9, Mask::Squares, true);

        let p1: WordSearch = generate(&settings, &words, &mut StdRng::seed_from_u64(5)).unwrap();
        let p2: WordSearch = generate(&settings, &words, &mut StdRng::seed_from_u64(5)).unwrap();

        assert_eq!(p1.grid, p2.grid);
        assert_eq!(p1.solution, p2.solution);
        assert_eq!(p1.placements, p2.placements);
        assert_eq!(p1.attempts, p2.attempts);
    }

    #[test]
    fn word_too_long() {
        let mut rng: CountingRng = CountingRng::new(0);
        let mut attempts: usize = 0;

        assert_eq!(
            generate_with(
                &settings(3, 3, Mask::None, false),
                &to_strings(&["SYSTEM"]),
                &mut rng,
                |_| attempts += 1
            ),
            Err(GenerateError::WordTooLong("SYSTEM".to_string(), 3))
        );
        // Rejected before the first attempt
        assert_eq!(attempts, 0);
        assert_eq!(rng.draws, 0);
    }

    #[test]
    fn longest_dimension_is_the_limit() {
        let mut rng: StdRng = StdRng::seed_from_u64(0);
        let puzzle: WordSearch = generate(
            &settings(2, 6, Mask::None, false),
            &to_strings(&["SYSTEM"]),
            &mut rng,
        )
        .unwrap();

        let rows: Vec<String> = puzzle.solution.iter().map(|r| r.iter().collect()).collect();
        assert!(rows.contains(&"SYSTEM".to_string()));
    }

    #[test]
    fn impossible_layout() {
        let mut rng: StdRng = StdRng::seed_from_u64(99);
        let words: Vec<String> = to_strings(&["AB", "CD"]);
        let mut attempts: Vec<usize> = Vec::new();

        assert_eq!(
            generate_with(
                &settings(2, 2, Mask::Circle, false),
                &words,
                &mut rng,
                |a| attempts.push(a)
            ),
            Err(GenerateError::AttemptsExhausted(DEFAULT_ATTEMPTS))
        );
        assert_eq!(attempts, (1..=DEFAULT_ATTEMPTS).collect::<Vec<usize>>());

        let three_attempts: Settings = Settings {
            attempts: 3,
            ..settings(2, 2, Mask::Circle, false)
        };
        let mut count: usize = 0;
        assert_eq!(
            generate_with(&three_attempts, &words, &mut rng, |_| count += 1),
            Err(GenerateError::AttemptsExhausted(3))
        );
        assert_eq!(count, 3);
    }

    #[test]
    fn attempts_are_counted() {
        let mut rng: StdRng = StdRng::seed_from_u64(8);
        let mut last: usize = 0;

        let tight: Settings = Settings {
            attempts: 50,
            ..settings(6, 6, Mask::None, true)
        };
        let puzzle: WordSearch = generate_with(
            &tight,
            &to_strings(&["SATURN", "VENUS", "EARTH", "MARS"]),
            &mut rng,
            |a| last = a,
        )
        .unwrap();
        assert_eq!(puzzle.attempts, last);
    }

    #[test]
    fn configuration_errors() {
        let mut rng: StdRng = StdRng::seed_from_u64(0);
        let words: Vec<String> = to_strings(&["CAT"]);

        assert_eq!(
            generate(&settings(0, 5, Mask::None, false), &words, &mut rng),
            Err(GenerateError::BadDimensions(0, 5))
        );
        assert_eq!(
            generate(&settings(5, NMAX + 1, Mask::None, false), &words, &mut rng),
            Err(GenerateError::BadDimensions(5, NMAX + 1))
        );
        assert_eq!(
            generate(&settings(5, 5, Mask::None, false), &[], &mut rng),
            Err(GenerateError::EmptyWordList)
        );
        assert_eq!(
            generate(
                &settings(5, 5, Mask::None, false),
                &to_strings(&["CAT", " "]),
                &mut rng
            ),
            Err(GenerateError::EmptyWord)
        );
        assert_eq!(
            generate(
                &settings(5, 5, Mask::None, false),
                &to_strings(&["Cat"]),
                &mut rng
            ),
            Err(GenerateError::InvalidLetter("Cat".to_string(), 'a'))
        );

        let no_attempts: Settings = Settings {
            attempts: 0,
            ..Settings::default()
        };
        let mut counting_rng: CountingRng = CountingRng::new(0);
        assert_eq!(
            generate(&no_attempts, &words, &mut counting_rng),
            Err(GenerateError::NoAttempts)
        );
        assert_eq!(counting_rng.draws, 0);
    }

    #[test]
    fn spaces_are_removed() {
        let mut rng: StdRng = StdRng::seed_from_u64(11);
        let puzzle: WordSearch = generate(
            &settings(1, 8, Mask::None, false),
            &to_strings(&["NEW YORK"]),
            &mut rng,
        )
        .unwrap();

        let row: String = puzzle.solution[0].iter().collect();
        assert!(row.contains("NEWYORK"));
        assert_eq!(puzzle.words, to_strings(&["NEWYORK"]));
        assert_eq!(puzzle.placements[0].word, "NEWYORK");
    }

    #[test]
    fn sorted_words() {
        assert_eq!(
            prepare_words(&to_strings(&["OX", "NEW YORK", "CAT", "DOG", "ELEPHANT"])),
            to_strings(&["ELEPHANT", "NEWYORK", "CAT", "DOG", "OX"])
        );
    }

    #[test]
    fn text_output() {
        let puzzle: WordSearch = WordSearch {
            words: to_strings(&["AB"]),
            grid: vec![vec!['A', 'B'], vec![' ', 'Z']],
            solution: vec![vec!['A', 'B'], vec![' ', ' ']],
            placements: Vec::new(),
            attempts: 1,
            duration: 0.0,
        };

        assert_eq!(puzzle.to_string(), "A B\n  Z\n\nAB\n");
    }

    #[test]
    fn json_output() {
        let puzzle: WordSearch = WordSearch {
            words: to_strings(&["AB"]),
            grid: vec![vec![' ', 'B'], vec!['A', 'Z']],
            solution: vec![vec![' ', 'B'], vec!['A', ' ']],
            placements: vec![Placement {
                word: "AB".to_string(),
                row: 1,
                col: 0,
                orientation: Orientation::UpRight,
                reversed: false,
            }],
            attempts: 2,
            duration: 0.5,
        };

        let value: serde_json::Value = serde_json::to_value(&puzzle).unwrap();
        assert!(value.get("duration").is_none());
        assert_eq!(value["attempts"], 2);
        assert_eq!(value["grid"][1][0], "A");
        assert_eq!(value["placements"][0]["orientation"], "up-right");
        assert_eq!(value["placements"][0]["reversed"], false);
    }
}
