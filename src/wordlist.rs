/*
wordlist.rs

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

//! Read the list of words to hide in the puzzle.
//!
//! The file contains one word per line.
//! Words are upper-cased and spaces inside words are removed.
//! Empty lines and lines starting with `#` are ignored:
//!
//! ```text
//! # The planets of the solar system
//! Mercury
//! Venus
//! Earth
//! ```

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Return the word from a line of the file, or `None` for comments and empty lines.
fn parse_line(line: &str) -> Option<String> {
    let line: String = line.trim().to_uppercase();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    Some(line.replace(' ', ""))
}

/// Read the words from a reader.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>, Box<dyn Error>> {
    let mut words: Vec<String> = Vec::new();

    for line in reader.lines() {
        if let Some(word) = parse_line(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Read the words from the given file.
pub fn load(path: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    debug!("Word list file: {path:?}");
    let file: File = File::open(path)?;
    let words: Vec<String> = read_words(BufReader::new(file))?;
    debug!("{} word(s) loaded", words.len());
    Ok(words)
}
