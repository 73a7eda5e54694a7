//! Grid dimensions and the direction table used for placement.

use crate::direction::{Direction, DIRECTIONS};
use crate::Error;

/// The number of rows in the default grid.
pub const DEFAULT_ROWS: usize = 12;

/// The number of columns in the default grid.
pub const DEFAULT_COLUMNS: usize = 12;

/// The configuration shared by every stage of grid generation. See [`GridConfig::new`] for details.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig<'a> {
    /// The number of rows.
    pub num_rows: usize,

    /// The number of columns.
    pub num_columns: usize,

    /// The directions words may be placed in. Placement scans them cyclically in this order.
    pub directions: &'a [Direction],
}

impl GridConfig<'static> {
    /// Creates a configuration with the given dimensions and the standard eight directions.
    ///
    /// Returns [`Error::DimensionsTooSmall`] when either dimension is zero.
    pub fn new(num_rows: usize, num_columns: usize) -> Result<Self, Error> {
        GridConfig::with_directions(num_rows, num_columns, &DIRECTIONS)
    }
}

impl<'a> GridConfig<'a> {
    /// Creates a configuration with a custom direction table.
    pub fn with_directions(
        num_rows: usize,
        num_columns: usize,
        directions: &'a [Direction],
    ) -> Result<Self, Error> {
        if num_rows == 0 || num_columns == 0 {
            return Err(Error::DimensionsTooSmall(num_rows, num_columns));
        }
        if directions.is_empty() {
            return Err(Error::EmptyDirectionTable);
        }
        if let Some(dir) = directions.iter().find(|dir| !dir.is_valid()) {
            return Err(Error::InvalidDirection(dir.d_row, dir.d_col));
        }

        Ok(Self {
            num_rows,
            num_columns,
            directions,
        })
    }

    /// The total number of cells in the grid.
    pub fn capacity(&self) -> usize {
        self.num_rows * self.num_columns
    }
}

impl Default for GridConfig<'static> {
    fn default() -> Self {
        Self {
            num_rows: DEFAULT_ROWS,
            num_columns: DEFAULT_COLUMNS,
            directions: &DIRECTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GridConfig;
    use crate::direction::Direction;
    use crate::Error;

    #[test]
    fn default_is_twelve_by_twelve() {
        let config = GridConfig::default();
        assert_eq!(config.capacity(), 144);
        assert_eq!(config.directions.len(), 8);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(matches!(
            GridConfig::new(0, 12),
            Err(Error::DimensionsTooSmall(0, 12))
        ));
    }

    #[test]
    fn bad_direction_tables_are_rejected() {
        assert!(matches!(
            GridConfig::with_directions(5, 5, &[]),
            Err(Error::EmptyDirectionTable)
        ));
        assert!(matches!(
            GridConfig::with_directions(5, 5, &[Direction::RIGHT, Direction::new(0, 0)]),
            Err(Error::InvalidDirection(0, 0))
        ));
    }

    #[test]
    fn custom_table_is_kept() {
        let dirs = [Direction::DOWN];
        let config = GridConfig::with_directions(4, 6, &dirs).unwrap();
        assert_eq!(config.directions, &dirs);
        assert_eq!(config.capacity(), 24);
    }
}
