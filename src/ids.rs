use std::collections::HashSet;

use log::{debug, warn};

use crate::error::{PuzzleError, SearchError};
use crate::grid::{CanonicalKey, Grid};
use crate::moves::{neighbors, Move};
use crate::Solution;

/// Iterative deepening from `start` to the goal.
///
/// The returned path is a shortest one. Unsolvable starts must be rejected
/// beforehand with [`crate::is_solvable`]; for those this never returns.
pub fn solve_iterative_deepening(start: &Grid) -> Result<Solution, SearchError> {
    let mut search = DepthLimited::new();
    let mut depth = 0;
    loop {
        if search.run(start, depth)? {
            return Ok(search.into_solution());
        }
        depth += 1;
    }
}

/// Like [`solve_iterative_deepening`] but gives up once every depth up to
/// `max_depth` has been searched. Terminates for unsolvable starts too.
pub fn solve_iterative_deepening_bounded(
    start: &Grid,
    max_depth: usize,
) -> Result<Solution, SearchError> {
    let mut search = DepthLimited::new();
    for depth in 0..=max_depth {
        if search.run(start, depth)? {
            return Ok(search.into_solution());
        }
    }

    warn!(
        "iterative deepening hit max depth {} after {} expansions",
        max_depth, search.expanded
    );
    Err(SearchError::DepthLimitReached {
        max_depth,
        expanded: search.expanded,
    })
}

struct DepthLimited {
    // keys on the current root-to-node path only
    on_path: HashSet<CanonicalKey>,
    path: Vec<Move>,
    // accumulates across depth iterations
    expanded: usize,
}

impl DepthLimited {
    fn new() -> DepthLimited {
        DepthLimited {
            on_path: HashSet::new(),
            path: Vec::new(),
            expanded: 0,
        }
    }

    fn run(&mut self, start: &Grid, depth: usize) -> Result<bool, PuzzleError> {
        self.on_path.clear();
        self.path.clear();
        self.on_path.insert(start.canonicalize());

        let found = self.descend(start, depth)?;
        debug!(
            "depth {}: {} ({} expansions so far)",
            depth,
            if found { "solved" } else { "exhausted" },
            self.expanded
        );
        Ok(found)
    }

    // on success `self.path` holds the moves from the root to the goal
    fn descend(&mut self, grid: &Grid, budget: usize) -> Result<bool, PuzzleError> {
        self.expanded += 1;
        if grid.is_goal() {
            return Ok(true);
        }

        if budget == 0 {
            return Ok(false);
        }

        for (mv, next) in neighbors(grid)? {
            let key = next.canonicalize();
            if !self.on_path.insert(key) {
                continue;
            }

            self.path.push(mv);
            let found = self.descend(&next, budget - 1);
            self.on_path.remove(&key);

            if found? {
                return Ok(true);
            }
            self.path.pop();
        }

        Ok(false)
    }

    fn into_solution(self) -> Solution {
        Solution {
            path: self.path,
            expanded: self.expanded,
        }
    }
}

#[cfg(test)]
mod test {
    use pathfinding::directed::bfs::bfs;
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    use super::*;
    use crate::grid::GOAL;
    use crate::moves::apply_path;

    // random walk away from the goal, so the start is solvable and shallow
    fn scramble(rng: &mut StdRng, moves: usize) -> Grid {
        (0..moves).fold(GOAL, |g, _| {
            let options = neighbors(&g).unwrap();
            options.choose(rng).unwrap().1
        })
    }

    fn shortest_distance(start: &Grid) -> usize {
        let route = bfs(
            start,
            |g| {
                neighbors(g)
                    .unwrap()
                    .into_iter()
                    .map(|(_, next)| next)
            },
            |g| g.is_goal(),
        );
        route.unwrap().len() - 1
    }

    #[test]
    fn one_move_from_goal() {
        let start: Grid = "1 2 3 4 5 6 7 0 8".parse().unwrap();
        let solution = solve_iterative_deepening(&start).unwrap();
        assert_eq!(solution.path, vec![Move::Right]);
        assert_eq!(solution.expanded, 5);
    }

    #[test]
    fn goal_yields_empty_path() {
        let solution = solve_iterative_deepening(&GOAL).unwrap();
        assert!(solution.path.is_empty());
        assert_eq!(solution.expanded, 1);
    }

    #[test]
    fn paths_are_shortest_and_reach_goal() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..8 {
            let start = scramble(&mut rng, 12);
            let solution = solve_iterative_deepening(&start).unwrap();
            assert_eq!(solution.path.len(), shortest_distance(&start));
            assert_eq!(apply_path(&start, &solution.path), Ok(GOAL));
        }
    }

    #[test]
    fn known_shortest_solution() {
        let start: Grid = "1 2 3 0 4 6 7 5 8".parse().unwrap();
        let solution = solve_iterative_deepening(&start).unwrap();
        assert_eq!(solution.path, vec![Move::Right, Move::Down, Move::Right]);
    }

    #[test]
    fn bounded_gives_up_on_unsolvable() {
        let start: Grid = "1 2 3 4 5 6 8 7 0".parse().unwrap();
        let err = solve_iterative_deepening_bounded(&start, 4).unwrap_err();
        assert!(matches!(
            err,
            SearchError::DepthLimitReached { max_depth: 4, .. }
        ));
    }

    #[test]
    fn bounded_matches_unbounded_within_cap() {
        let start: Grid = "1 2 3 0 4 6 7 5 8".parse().unwrap();
        assert_eq!(
            solve_iterative_deepening_bounded(&start, 10).unwrap(),
            solve_iterative_deepening(&start).unwrap()
        );
        assert!(solve_iterative_deepening_bounded(&start, 2).is_err());
    }
}
