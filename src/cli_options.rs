/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Generate a 10x12 puzzle in a circle from the words in `planets.txt`, and print the solution:
//!
//! ```
//! $ wordsearch -r 10 -c 12 -m circle --solution planets.txt
//! ```
//!
//! Generate the same puzzle again, as JSON:
//!
//! ```
//! $ wordsearch --seed 42 --json planets.txt
//! ```

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::error::Error;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

use crate::config::{COPYRIGHT_NOTICE, DEFAULT_ATTEMPTS, DEFAULT_SIZE, NMAX, PKGNAME, VERSION};
use crate::generator::mask::Mask;
use crate::generator::scan;
use crate::generator::wordsearch::{self, Settings, WordSearch};
use crate::wordlist;

/// Build word search puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// File with the words to hide, one per line
    wordlist: PathBuf,

    /// Number of rows
    #[arg(short, long, default_value_t = DEFAULT_SIZE, value_parser = grid_size)]
    rows: usize,

    /// Number of columns
    #[arg(short, long, default_value_t = DEFAULT_SIZE, value_parser = grid_size)]
    cols: usize,

    /// Shape of the puzzle
    #[arg(value_enum, short, long, default_value_t = Mask::None)]
    mask: Mask,

    /// Allow words to be written backwards
    #[arg(short, long, default_value_t = false)]
    backwards: bool,

    /// Seed for the random generator, to build the same puzzle again
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maximum number of attempts to place all the words
    #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS)]
    attempts: usize,

    /// Also print the solution
    #[arg(long, default_value_t = false)]
    solution: bool,

    /// Print the puzzle in JSON format
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Print some statistics after generating the puzzle
    #[arg(long, default_value_t = false, conflicts_with = "json")]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse a number of rows or columns.
fn grid_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if (1..=NMAX).contains(&size) {
        Ok(size)
    } else {
        Err(format!("must be between 1 and {NMAX}"))
    }
}

/// Print the puzzle as JSON on the standard output.
fn print_json(puzzle: &WordSearch) -> Result<(), Box<dyn Error>> {
    let mut writer = BufWriter::new(stdout().lock());

    serde_json::to_writer_pretty(&mut writer, puzzle)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Print the puzzle, and optionally the solution, as text.
fn print_text(puzzle: &WordSearch, with_solution: bool) -> Result<(), Box<dyn Error>> {
    let mut out: String = puzzle.to_string();

    if with_solution {
        out.push('\n');
        wordsearch::write_rows(&mut out, &puzzle.solution)?;
    }
    print!("{out}");
    Ok(())
}

/// Print the number of attempts, the duration, and where the words are.
fn print_summary(puzzle: &WordSearch, backwards: bool) {
    println!(
        "
          attempts = {}
              time = {}s",
        puzzle.attempts, puzzle.duration
    );
    for placement in &puzzle.placements {
        // Random filler letters might form the word again elsewhere
        let occurrences: usize = scan::count(&puzzle.grid, &placement.word, backwards);
        println!(
            "{:>18} = row {} col {} {}{} (found {} time(s))",
            placement.word,
            placement.row,
            placement.col,
            placement.orientation,
            if placement.reversed { " reversed" } else { "" },
            occurrences
        );
    }
}

/// Parse and process command-line options, and return the exit code.
pub fn run() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
    debug!("{PKGNAME} {VERSION}");

    let words: Vec<String> = match wordlist::load(&args.wordlist) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("{}: {e}", args.wordlist.display());
            return 1;
        }
    };

    let settings: Settings = Settings {
        nrows: args.rows,
        ncols: args.cols,
        backwards: args.backwards,
        mask: args.mask,
        attempts: args.attempts,
    };

    let mut rng: StdRng = match args.seed {
        Some(seed) => {
            debug!("Seed = {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let puzzle: WordSearch = match wordsearch::generate(&settings, &words, &mut rng) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}.");
            return 1;
        }
    };

    let ret: Result<(), Box<dyn Error>> = if args.json {
        print_json(&puzzle)
    } else {
        print_text(&puzzle, args.solution)
    };
    if let Err(e) = ret {
        eprintln!("{e}");
        return 1;
    }

    if args.summary {
        print_summary(&puzzle, args.backwards);
    }
    0
}
