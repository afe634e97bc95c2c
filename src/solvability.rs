use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};

use crate::grid::{Grid, CELLS};

/// Whether `grid` can reach the goal at all.
///
/// The goal is the identity ordering with the blank last, and on an
/// odd-width board every move preserves inversion parity, so an even count
/// of inversions among the numbered tiles is both necessary and sufficient.
pub fn is_solvable(grid: &Grid) -> bool {
    inversions(grid) % 2 == 0
}

fn inversions(grid: &Grid) -> usize {
    grid.canonicalize()
        .into_iter()
        .filter(|&t| t != 0)
        .tuple_combinations()
        .filter(|(a, b)| a > b)
        .count()
}

/// Shuffles the tiles until the arrangement is solvable.
pub fn random_solvable<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    let mut cells: Vec<u8> = (0..CELLS as u8).collect();
    loop {
        cells.shuffle(rng);
        // a shuffle of 0..9 is always a valid grid
        if let Ok(grid) = Grid::from_cells(&cells) {
            if is_solvable(&grid) {
                return grid;
            }
        }
    }
}
