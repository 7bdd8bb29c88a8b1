/*
generator.rs

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

//! Generate word search puzzles.
//!
//! A puzzle is built in several steps, which are repeated until all the words fit or the maximum
//! number of attempts is reached (see [`wordsearch::generate`]):
//!
//! * A [`grid::Grid`] object is created with the requested dimensions.
//!   The cells outside the shape selected by the [`mask::Mask`] are blocked.
//!
//! * The words are placed, longest first, by the [`placement`] module.
//!   Each word gets a random [`orientation::Orientation`] and a random position among the
//!   positions where it does not conflict with the words already placed.
//!   If a word cannot be placed, then the attempt is abandoned.
//!
//! * The [`filler`] module keeps a copy of the grid as the solution, and then completes the
//!   remaining cells with random letters.
//!
//! The [`scan`] module searches the words in a generated grid.

pub mod filler;
pub mod grid;
pub mod mask;
pub mod orientation;
pub mod placement;
pub mod scan;
pub mod wordsearch;
