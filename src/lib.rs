//! Solvers for the 3×3 sliding-tile puzzle.
//!
//! Two uninformed strategies share the same state model: iterative
//! deepening, which always finds a shortest solution, and a bidirectional
//! breadth-first search that meets in the middle.

mod bidirectional;
mod error;
mod grid;
mod ids;
mod moves;
mod solvability;

pub use bidirectional::{solve_bidirectional, solve_bidirectional_bounded};
pub use error::{PuzzleError, SearchError};
pub use grid::{CanonicalKey, Grid, GOAL};
pub use ids::{solve_iterative_deepening, solve_iterative_deepening_bounded};
pub use moves::{apply_path, neighbors, step, Move, Neighbors};
pub use solvability::{is_solvable, random_solvable};

/// A move sequence from the start to the goal, with the number of nodes
/// the engine expanded to find it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution {
    pub path: Vec<Move>,
    pub expanded: usize,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn both_engines_agree_on_one_move() {
        let start = Grid::new(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]]).unwrap();
        assert!(is_solvable(&start));

        let ids = solve_iterative_deepening(&start).unwrap();
        let bidi = solve_bidirectional(&start).unwrap();
        assert_eq!(ids.path, vec![Move::Right]);
        assert_eq!(bidi.path, vec![Move::Right]);
        assert_eq!((ids.expanded, bidi.expanded), (5, 1));
    }

    #[test]
    fn swapped_tiles_are_rejected() {
        let start = Grid::new(vec![vec![1, 2, 3], vec![4, 5, 6], vec![8, 7, 0]]).unwrap();
        assert!(!is_solvable(&start));
    }

    #[test]
    fn bidirectional_is_never_shorter_than_iterative_deepening() {
        let start: Grid = "4 1 3 7 2 6 0 5 8".parse().unwrap();
        let ids = solve_iterative_deepening(&start).unwrap();
        let bidi = solve_bidirectional(&start).unwrap();
        assert!(bidi.path.len() >= ids.path.len());
        assert_eq!(apply_path(&start, &ids.path), Ok(GOAL));
        assert_eq!(apply_path(&start, &bidi.path), Ok(GOAL));
    }
}
