use std::fmt::{self, Display};

use smallvec::SmallVec;

use crate::error::PuzzleError;
use crate::grid::{Grid, SIZE};

/// Direction the blank travels.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    // the order here decides which of several equal-length solutions
    // each engine reports first
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn inverse(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        f.write_str(name)
    }
}

pub type Neighbors = SmallVec<[(Move, Grid); 4]>;

/// Slides the blank one cell in direction `mv`, or `None` if that would
/// leave the board.
pub fn step(grid: &Grid, mv: Move) -> Result<Option<Grid>, PuzzleError> {
    let blank = grid.blank_position()?;
    let (di, dj) = mv.delta();
    let target = (blank.0 as i32 + di, blank.1 as i32 + dj);

    let on_board = (0..SIZE as i32).contains(&target.0) && (0..SIZE as i32).contains(&target.1);
    if !on_board {
        return Ok(None);
    }

    Ok(Some(
        grid.swapped(blank, (target.0 as usize, target.1 as usize)),
    ))
}

/// Every legal move from `grid` paired with the grid it produces, in
/// `Move::ALL` order.
pub fn neighbors(grid: &Grid) -> Result<Neighbors, PuzzleError> {
    let mut out = Neighbors::new();
    for mv in Move::ALL {
        if let Some(next) = step(grid, mv)? {
            out.push((mv, next));
        }
    }

    Ok(out)
}

/// Replays `path` from `start`, failing on the first move that walks the
/// blank off the board.
pub fn apply_path(start: &Grid, path: &[Move]) -> Result<Grid, PuzzleError> {
    path.iter()
        .enumerate()
        .try_fold(*start, |grid, (ix, &mv)| {
            step(&grid, mv)?.ok_or(PuzzleError::IllegalMove { step: ix + 1, mv })
        })
}
