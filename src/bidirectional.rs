use std::collections::{HashMap, VecDeque};
use std::fmt::{self, Display};

use log::{debug, warn};

use crate::error::SearchError;
use crate::grid::{CanonicalKey, Grid, GOAL};
use crate::moves::{neighbors, Move};
use crate::Solution;

/// Breadth-first search from the start and the goal at once, alternating
/// one expansion per side until the two explored sets touch.
///
/// The result is a valid solution but, since the sides advance a node at a
/// time rather than a layer at a time, not always a shortest one.
pub fn solve_bidirectional(start: &Grid) -> Result<Solution, SearchError> {
    search(start, None)
}

/// Like [`solve_bidirectional`] but stops after `node_budget` expansions.
pub fn solve_bidirectional_bounded(
    start: &Grid,
    node_budget: usize,
) -> Result<Solution, SearchError> {
    search(start, Some(node_budget))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Side {
    Start,
    Goal,
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Start => "start",
            Side::Goal => "goal",
        })
    }
}

struct Frontier {
    side: Side,
    queue: VecDeque<(CanonicalKey, Vec<Move>)>,
    // every key this side has reached, with the moves from its root
    visited: HashMap<CanonicalKey, Vec<Move>>,
}

/// Where the two sides touched, as seen from each root.
struct Meeting {
    from_start: Vec<Move>,
    from_goal: Vec<Move>,
}

impl Meeting {
    // the goal side's moves lead away from the goal, so walk them backwards
    fn into_path(self) -> Vec<Move> {
        let mut path = self.from_start;
        path.extend(self.from_goal.iter().rev().map(|mv| mv.inverse()));
        path
    }
}

impl Frontier {
    fn rooted_at(side: Side, root: &Grid) -> Frontier {
        let key = root.canonicalize();
        Frontier {
            side,
            queue: VecDeque::from([(key, Vec::new())]),
            visited: HashMap::from([(key, Vec::new())]),
        }
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Expands the oldest queued node, reporting a meeting as soon as a
    /// newly reached key is already known to `other`.
    fn expand(
        &mut self,
        other: &Frontier,
        expanded: &mut usize,
    ) -> Result<Option<Meeting>, SearchError> {
        let Some((key, path)) = self.queue.pop_front() else {
            return Ok(None);
        };
        *expanded += 1;

        let grid = Grid::decode(key)?;
        for (mv, next) in neighbors(&grid)? {
            let next_key = next.canonicalize();
            if self.visited.contains_key(&next_key) {
                continue;
            }

            let mut next_path = path.clone();
            next_path.push(mv);
            self.visited.insert(next_key, next_path.clone());

            if let Some(theirs) = other.visited.get(&next_key) {
                let theirs = theirs.clone();
                return Ok(Some(match self.side {
                    Side::Start => Meeting {
                        from_start: next_path,
                        from_goal: theirs,
                    },
                    Side::Goal => Meeting {
                        from_start: theirs,
                        from_goal: next_path,
                    },
                }));
            }

            self.queue.push_back((next_key, next_path));
        }

        Ok(None)
    }
}

fn search(start: &Grid, node_budget: Option<usize>) -> Result<Solution, SearchError> {
    if start.is_goal() {
        return Ok(Solution {
            path: Vec::new(),
            expanded: 0,
        });
    }

    let mut from_start = Frontier::rooted_at(Side::Start, start);
    let mut from_goal = Frontier::rooted_at(Side::Goal, &GOAL);
    let mut expanded = 0;

    while !from_start.is_empty() && !from_goal.is_empty() {
        for side in [Side::Start, Side::Goal] {
            if let Some(budget) = node_budget {
                if expanded >= budget {
                    warn!("bidirectional search spent its budget of {} nodes", budget);
                    return Err(SearchError::NodeBudgetExhausted { budget, expanded });
                }
            }

            let meeting = match side {
                Side::Start => from_start.expand(&from_goal, &mut expanded)?,
                Side::Goal => from_goal.expand(&from_start, &mut expanded)?,
            };

            if let Some(meeting) = meeting {
                let path = meeting.into_path();
                debug!(
                    "frontiers met while expanding the {} side: {} moves, {} expansions",
                    side,
                    path.len(),
                    expanded
                );
                return Ok(Solution { path, expanded });
            }
        }
    }

    Err(SearchError::SearchExhausted { expanded })
}
