#![warn(missing_docs)]

//! # Word search grids
//!
//! A crate that generates fixed-size word search grids. Every given word is hidden along one of
//! eight directions, possibly crossing other words. Depending on the [`Difficulty`], the space
//! left over is filled with decoy words before the remaining cells get random letters.
//!
//! All randomness comes from the [`rand::Rng`] passed in, so a seeded generator always produces
//! the same grid.

use std::fmt::Display;

use log::debug;
use rand::Rng;

pub mod config;
pub mod difficulty;
pub mod direction;
pub mod filler;
pub mod grid;
pub mod message;
pub mod placement;

pub use config::GridConfig;
pub use difficulty::Difficulty;
pub use direction::{Direction, DIRECTIONS};
pub use grid::Grid;
pub use message::place_message;
pub use placement::Placement;

/// An error in the grid configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Either the number of rows or the number of columns is zero.
    DimensionsTooSmall(usize, usize),

    /// The direction table has no entries, so no word could ever be placed.
    EmptyDirectionTable,

    /// A direction in the table is not a unit step, or does not move at all.
    InvalidDirection(isize, isize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DimensionsTooSmall(num_rows, num_columns) => {
                write!(
                    f,
                    "Grid dimensions {} rows x {} columns is too small to hold any letter",
                    num_rows, num_columns
                )
            }
            Error::EmptyDirectionTable => {
                write!(f, "The direction table is empty, words cannot be placed")
            }
            Error::InvalidDirection(d_row, d_col) => {
                write!(
                    f,
                    "Direction ({}, {}) is not a unit step through the grid",
                    d_row, d_col
                )
            }
        }
    }
}

impl std::error::Error for Error {}

/// A word search generator bound to one grid configuration and one difficulty.
#[derive(Clone, Copy, Debug)]
pub struct WordSearch<'a> {
    config: GridConfig<'a>,
    difficulty: Difficulty,
}

impl<'a> WordSearch<'a> {
    /// Creates a generator for the given configuration and difficulty.
    pub fn new(config: GridConfig<'a>, difficulty: Difficulty) -> Self {
        Self { config, difficulty }
    }

    /// The grid configuration.
    pub fn config(&self) -> &GridConfig<'a> {
        &self.config
    }

    /// The difficulty decoys are generated for.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Generates a grid holding `words` and returns its cells as one-letter strings, in row-major
    /// order.
    ///
    /// The result always has `num_rows * num_columns` entries, each an uppercase letter. Words that
    /// cannot be fitted are left out without notice.
    pub fn create<S: AsRef<str>, R: Rng + ?Sized>(&self, words: &[S], rng: &mut R) -> Vec<String> {
        self.create_grid(words, rng).flatten()
    }

    /// Like [`WordSearch::create`], but returns the filled grid instead of flattening it.
    pub fn create_grid<S: AsRef<str>, R: Rng + ?Sized>(&self, words: &[S], rng: &mut R) -> Grid {
        let directions = self.config.directions;
        let mut grid = Grid::new(&self.config);
        let mut cells_filled = 0;

        for word in words {
            let word = word.as_ref().to_uppercase();
            let placed = placement::try_place_word(&mut grid, &word, directions, rng);
            cells_filled += placed.new_cells();
        }

        if self.difficulty != Difficulty::Easy {
            let remaining = grid.len().saturating_sub(cells_filled);
            debug!("{cells_filled} cells taken by words, {remaining} left for decoys");

            for decoy in filler::dummy_words(words, remaining, self.difficulty, rng) {
                cells_filled +=
                    placement::try_place_word(&mut grid, &decoy, directions, rng).new_cells();
            }
        }

        debug!("{cells_filled} cells taken before the final fill");
        grid.finalize(rng);
        grid
    }
}

/// Generates a 12 x 12 word search with the standard directions. See [`WordSearch::create`].
pub fn create_word_search<S: AsRef<str>, R: Rng + ?Sized>(
    words: &[S],
    difficulty: Difficulty,
    rng: &mut R,
) -> Vec<String> {
    WordSearch::new(GridConfig::default(), difficulty).create(words, rng)
}
