//! The letter grid being built, and the final fill and flatten steps.

use std::{fmt::Display, ops::Index};

use array2d::Array2D;
use log::debug;
use rand::Rng;

use crate::config::GridConfig;

/// The letters used to fill cells that no word claimed.
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// A fixed-size grid where each cell is either empty or holds one uppercase letter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<Option<char>>,
}

impl Grid {
    /// Creates a grid with the configured dimensions and every cell empty.
    pub fn new(config: &GridConfig) -> Self {
        Self {
            cells: Array2D::filled_with(None, config.num_rows, config.num_columns),
        }
    }

    /// The number of rows in the grid.
    pub fn num_rows(&self) -> usize {
        self.cells.num_rows()
    }

    /// The number of columns in the grid.
    pub fn num_columns(&self) -> usize {
        self.cells.num_columns()
    }

    /// The number of cells in the grid.
    pub fn len(&self) -> usize {
        self.num_rows() * self.num_columns()
    }

    /// Whether the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets the letter at the specified coordinate. Returns [`None`] for an empty cell or when the
    /// coordinate is out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<char> {
        self.cells.get(row, column).copied().flatten()
    }

    /// Converts a row-major linear index into a `(row, column)` coordinate.
    pub fn coordinate(&self, index: usize) -> (usize, usize) {
        (index / self.num_columns(), index % self.num_columns())
    }

    pub(crate) fn set(&mut self, coord: (usize, usize), letter: char) {
        self.cells[coord] = Some(letter);
    }

    /// The number of cells that do not hold a letter yet.
    pub fn empty_cells(&self) -> usize {
        self.cells
            .elements_row_major_iter()
            .filter(|cell| cell.is_none())
            .count()
    }

    /// Fills every empty cell with a letter drawn uniformly from A to Z. Cells that already hold a
    /// letter are left untouched.
    pub fn finalize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut filled = 0;

        for row in 0..self.num_rows() {
            for column in 0..self.num_columns() {
                if self.cells[(row, column)].is_none() {
                    self.cells[(row, column)] = Some(ALPHABET[rng.gen_range(0..ALPHABET.len())]);
                    filled += 1;
                }
            }
        }

        debug!("Filled {filled} empty cells with random letters");
    }

    /// Returns every cell as a one-letter string, in row-major order.
    ///
    /// Expects [`Grid::finalize`] to have run first. A cell that is still empty comes out as a
    /// single space.
    pub fn flatten(&self) -> Vec<String> {
        self.cells
            .elements_row_major_iter()
            .map(|cell| cell.unwrap_or(' ').to_string())
            .collect()
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Option<char>;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.cells[index]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows_iter() {
            let mut first = true;

            for cell in row {
                if !first {
                    f.write_str(" ")?;
                }
                first = false;

                write!(f, "{}", cell.unwrap_or('.'))?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
