//! The eight directions a word can be read in.

/// A unit step through the grid, as a `(row, column)` delta.
///
/// Both components are in `-1..=1` and at least one of them is non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    /// Row delta. Positive goes down.
    pub d_row: isize,

    /// Column delta. Positive goes right.
    pub d_col: isize,
}

impl Direction {
    /// The word goes right from the start position.
    pub const RIGHT: Self = Self::new(0, 1);

    /// The word goes down from the start position.
    pub const DOWN: Self = Self::new(1, 0);

    /// The word goes diagonally down and right from the start position.
    pub const DOWN_RIGHT: Self = Self::new(1, 1);

    /// The word goes diagonally up and right from the start position.
    pub const UP_RIGHT: Self = Self::new(-1, 1);

    /// The word goes left from the start position.
    pub const LEFT: Self = Self::new(0, -1);

    /// The word goes up from the start position.
    pub const UP: Self = Self::new(-1, 0);

    /// The word goes diagonally up and left from the start position.
    pub const UP_LEFT: Self = Self::new(-1, -1);

    /// The word goes diagonally down and left from the start position.
    pub const DOWN_LEFT: Self = Self::new(1, -1);

    /// Creates a direction from its row and column deltas.
    pub const fn new(d_row: isize, d_col: isize) -> Self {
        Self { d_row, d_col }
    }

    /// Whether both deltas are unit steps and the direction actually moves.
    pub fn is_valid(&self) -> bool {
        (-1..=1).contains(&self.d_row)
            && (-1..=1).contains(&self.d_col)
            && (self.d_row, self.d_col) != (0, 0)
    }

    /// Returns the coordinate `offset` steps away from `begin`, or [`None`] if it leaves the
    /// `num_rows` x `num_columns` grid.
    pub fn step(
        &self,
        begin: (usize, usize),
        offset: usize,
        num_rows: usize,
        num_columns: usize,
    ) -> Option<(usize, usize)> {
        let offset = offset as isize;
        let row = begin.0 as isize + self.d_row * offset;
        let column = begin.1 as isize + self.d_col * offset;

        if row < 0 || column < 0 || row as usize >= num_rows || column as usize >= num_columns {
            return None;
        }

        Some((row as usize, column as usize))
    }

    /// Whether a word of `len` letters starting at `begin` stays inside the grid.
    ///
    /// Each axis is checked on its own, and only when this direction moves along it.
    pub fn fits(
        &self,
        begin: (usize, usize),
        len: usize,
        num_rows: usize,
        num_columns: usize,
    ) -> bool {
        let (row, column) = begin;

        let row_fits = match self.d_row {
            1 => len + row <= num_rows,
            -1 => len <= row + 1,
            _ => true,
        };
        let column_fits = match self.d_col {
            1 => len + column <= num_columns,
            -1 => len <= column + 1,
            _ => true,
        };

        row_fits && column_fits
    }
}

/// The standard direction table, in the order placement scans it.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::RIGHT,
    Direction::DOWN,
    Direction::DOWN_RIGHT,
    Direction::UP_RIGHT,
    Direction::LEFT,
    Direction::UP,
    Direction::UP_LEFT,
    Direction::DOWN_LEFT,
];

#[cfg(test)]
mod tests {
    use super::{Direction, DIRECTIONS};

    #[test]
    fn table_has_eight_distinct_valid_directions() {
        for (i, dir) in DIRECTIONS.iter().enumerate() {
            assert!(dir.is_valid());
            assert!(!DIRECTIONS[i + 1..].contains(dir));
        }
    }

    #[test]
    fn zero_and_long_steps_are_invalid() {
        assert!(!Direction::new(0, 0).is_valid());
        assert!(!Direction::new(2, 0).is_valid());
        assert!(!Direction::new(0, -2).is_valid());
    }

    #[test]
    fn fits_checks_each_moving_axis() {
        // 3 letters going right from column 9 of a 12-wide grid end on column 11
        assert!(Direction::RIGHT.fits((0, 9), 3, 12, 12));
        assert!(!Direction::RIGHT.fits((0, 10), 3, 12, 12));

        // going left needs len - 1 <= column
        assert!(Direction::LEFT.fits((5, 2), 3, 12, 12));
        assert!(!Direction::LEFT.fits((5, 1), 3, 12, 12));

        // the row is irrelevant for horizontal words
        assert!(Direction::LEFT.fits((11, 2), 3, 12, 12));

        assert!(Direction::UP_LEFT.fits((2, 2), 3, 12, 12));
        assert!(!Direction::UP_LEFT.fits((1, 2), 3, 12, 12));
        assert!(!Direction::DOWN_RIGHT.fits((10, 0), 3, 12, 12));
    }

    #[test]
    fn step_walks_and_stops_at_edges() {
        assert_eq!(Direction::DOWN_LEFT.step((0, 5), 2, 12, 12), Some((2, 3)));
        assert_eq!(Direction::UP.step((0, 5), 1, 12, 12), None);
        assert_eq!(Direction::RIGHT.step((0, 11), 1, 12, 12), None);
    }
}
