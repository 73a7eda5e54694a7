//! Fitting a single word into the grid.

use log::{debug, trace};
use rand::Rng;

use crate::direction::Direction;
use crate::grid::Grid;

/// The outcome of trying to put a word into the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// No direction and start position could hold the word. The grid is unchanged.
    Failed,

    /// The word is in the grid. `new_cells` counts the cells it filled that were empty before,
    /// which is zero when the word ran entirely over letters that were already there.
    Placed {
        /// Cells newly filled by this word.
        new_cells: usize,
    },
}

impl Placement {
    /// Whether the word made it into the grid.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed { .. })
    }

    /// The number of cells newly filled, zero on failure.
    pub fn new_cells(&self) -> usize {
        match self {
            Placement::Failed => 0,
            Placement::Placed { new_cells } => *new_cells,
        }
    }
}

/// Places `word` somewhere in the grid using one of `directions`.
///
/// The scan starts at a random direction and a random cell, then walks every direction and every
/// cell cyclically from there. The first location that accepts the word wins. When none does the
/// word is dropped and [`Placement::Failed`] is returned.
pub fn try_place_word<R: Rng + ?Sized>(
    grid: &mut Grid,
    word: &str,
    directions: &[Direction],
    rng: &mut R,
) -> Placement {
    let letters: Vec<char> = word.chars().collect();
    let num_cells = grid.len();

    if letters.is_empty() || directions.is_empty() || num_cells == 0 {
        return Placement::Failed;
    }

    let first_dir = rng.gen_range(0..directions.len());
    let first_pos = rng.gen_range(0..num_cells);

    for i in 0..directions.len() {
        let dir = directions[(i + first_dir) % directions.len()];

        for j in 0..num_cells {
            let pos = (j + first_pos) % num_cells;
            let placement = place_letters(grid, &letters, dir, pos);

            if placement.is_placed() {
                trace!("Placed {word} at cell {pos} going {dir:?}: {placement:?}");
                return placement;
            }
        }
    }

    debug!("No room for {word}, dropping it");
    Placement::Failed
}

/// Tries to place `word` starting at the row-major cell index `start` and going in `direction`.
///
/// The word is rejected when it would leave the grid, or when an occupied cell on its path holds
/// a different letter. Otherwise the empty cells on the path receive their letters.
pub fn try_location(grid: &mut Grid, word: &str, direction: Direction, start: usize) -> Placement {
    let letters: Vec<char> = word.chars().collect();
    place_letters(grid, &letters, direction, start)
}

fn place_letters(
    grid: &mut Grid,
    letters: &[char],
    direction: Direction,
    start: usize,
) -> Placement {
    let num_rows = grid.num_rows();
    let num_columns = grid.num_columns();

    if letters.is_empty() || start >= grid.len() {
        return Placement::Failed;
    }

    let begin = grid.coordinate(start);
    if !direction.fits(begin, letters.len(), num_rows, num_columns) {
        return Placement::Failed;
    }

    let mut path = Vec::with_capacity(letters.len());
    for (offset, &letter) in letters.iter().enumerate() {
        let Some(coord) = direction.step(begin, offset, num_rows, num_columns) else {
            return Placement::Failed;
        };

        match grid[coord] {
            Some(existing) if existing != letter => return Placement::Failed,
            _ => path.push(coord),
        }
    }

    let mut overlaps = 0;
    for (coord, &letter) in path.into_iter().zip(letters) {
        if grid[coord] == Some(letter) {
            overlaps += 1;
        } else {
            grid.set(coord, letter);
        }
    }

    Placement::Placed {
        new_cells: letters.len() - overlaps,
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{try_location, try_place_word, Placement};
    use crate::config::GridConfig;
    use crate::direction::{Direction, DIRECTIONS};
    use crate::grid::Grid;
    use crate::tests::find_word;

    #[test]
    fn word_is_written_along_direction() {
        let mut grid = Grid::new(&GridConfig::default());

        let placement = try_location(&mut grid, "CAT", Direction::DOWN_RIGHT, 13);

        assert_eq!(placement, Placement::Placed { new_cells: 3 });
        assert_eq!(grid.get(1, 1), Some('C'));
        assert_eq!(grid.get(2, 2), Some('A'));
        assert_eq!(grid.get(3, 3), Some('T'));
        assert_eq!(grid.empty_cells(), 141);
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut grid = Grid::new(&GridConfig::default());

        // row 0, column 10: only two columns left
        assert_eq!(
            try_location(&mut grid, "CAT", Direction::RIGHT, 10),
            Placement::Failed
        );
        // row 1 going up has room for two letters
        assert_eq!(
            try_location(&mut grid, "CAT", Direction::UP, 12),
            Placement::Failed
        );
        assert_eq!(grid.empty_cells(), 144);
    }

    #[test]
    fn collision_leaves_grid_untouched() {
        let mut grid = Grid::new(&GridConfig::default());
        try_location(&mut grid, "DOG", Direction::DOWN, 2);
        let before = grid.clone();

        // the third letter lands on the 'O' of DOG
        assert_eq!(
            try_location(&mut grid, "CAT", Direction::LEFT, 16),
            Placement::Failed
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn crossing_words_share_letter() {
        let mut grid = Grid::new(&GridConfig::default());
        try_location(&mut grid, "DOG", Direction::DOWN, 2);

        // GOT going right from row 1, column 1 crosses DOG at its 'O'
        let placement = try_location(&mut grid, "GOT", Direction::RIGHT, 13);

        assert_eq!(placement, Placement::Placed { new_cells: 2 });
        assert_eq!(grid.get(1, 2), Some('O'));
        assert!(find_word(&grid, "DOG"));
        assert!(find_word(&grid, "GOT"));
    }

    #[test]
    fn full_overlap_counts_as_placed() {
        let mut grid = Grid::new(&GridConfig::default());
        try_location(&mut grid, "DOG", Direction::RIGHT, 0);

        let placement = try_location(&mut grid, "DOG", Direction::RIGHT, 0);

        assert_eq!(placement, Placement::Placed { new_cells: 0 });
        assert!(placement.is_placed());
        assert_eq!(placement.new_cells(), 0);
    }

    #[test]
    fn placed_words_can_be_found() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut grid = Grid::new(&GridConfig::default());
        let words = ["PANIC", "SEARCH", "LAZY", "GRID", "LETTER"];

        for word in words {
            let placement = try_place_word(&mut grid, word, &DIRECTIONS, &mut rng);
            assert!(placement.is_placed(), "{word} was not placed");
        }

        for word in words {
            assert!(find_word(&grid, word), "{word} is not in the grid");
        }
    }

    #[test]
    fn word_longer_than_grid_is_dropped() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(&GridConfig::new(3, 3).unwrap());

        let placement = try_place_word(&mut grid, "LONGWORD", &DIRECTIONS, &mut rng);

        assert_eq!(placement, Placement::Failed);
        assert_eq!(grid.empty_cells(), 9);
    }

    #[test]
    fn word_without_room_is_dropped() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = GridConfig::new(1, 3).unwrap();
        let mut grid = Grid::new(&config);
        try_location(&mut grid, "ABC", Direction::RIGHT, 0);

        assert_eq!(
            try_place_word(&mut grid, "XY", &DIRECTIONS, &mut rng),
            Placement::Failed
        );
        // reversed text fits going left
        assert!(try_place_word(&mut grid, "CB", &DIRECTIONS, &mut rng).is_placed());
    }

    #[test]
    fn empty_word_is_never_placed() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut grid = Grid::new(&GridConfig::default());

        assert_eq!(
            try_place_word(&mut grid, "", &DIRECTIONS, &mut rng),
            Placement::Failed
        );
    }
}
