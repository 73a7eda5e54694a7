//! Stamping a secret message across the grid.

use log::debug;
use rand::Rng;

use crate::grid::Grid;

/// Spreads the uppercased `message` evenly over the grid and returns how many letters were
/// written.
///
/// The grid is cut into equal runs of `len / message length` cells in row-major order, and each
/// letter goes to a random cell of its own run. Whatever was in that cell is overwritten. An empty
/// message, or one with at least as many letters as the grid has cells, changes nothing and
/// returns 0.
pub fn place_message<R: Rng + ?Sized>(grid: &mut Grid, message: &str, rng: &mut R) -> usize {
    let letters: Vec<char> = message.to_uppercase().chars().collect();
    let message_len = letters.len();

    if message_len == 0 || message_len >= grid.len() {
        return 0;
    }

    let gap = grid.len() / message_len;
    for (i, &letter) in letters.iter().enumerate() {
        let pos = i * gap + rng.gen_range(0..gap);
        grid.set(grid.coordinate(pos), letter);
    }

    debug!("Hid a {message_len} letter message with gap {gap}");
    message_len
}
