use std::{
    fmt::{Display, Write},
    ops::Index,
    str::FromStr,
};

use crate::error::PuzzleError;

pub const SIZE: usize = 3;
pub const CELLS: usize = SIZE * SIZE;

const BLANK: u8 = 0;

/// Row-major flattening of a grid, used wherever states are compared or hashed.
pub type CanonicalKey = [u8; CELLS];

/// The solved arrangement, with the blank in the bottom-right corner.
pub const GOAL: Grid = Grid {
    cells: [1, 2, 3, 4, 5, 6, 7, 8, BLANK],
};

/// A 3×3 arrangement of the tiles 1–8 and one blank.
///
/// Every constructor checks that the cells are a permutation of 0–8, so a
/// `Grid` in hand is always well-formed. Grids are never edited in place:
/// moves derive new grids.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Grid {
    cells: [u8; CELLS],
}

impl Grid {
    pub fn new(from: Vec<Vec<u8>>) -> Result<Grid, PuzzleError> {
        if from.len() != SIZE {
            return Err(PuzzleError::invalid(format!(
                "expected {} rows, got {}",
                SIZE,
                from.len()
            )));
        }

        if let Some((ix, row)) = from.iter().enumerate().find(|(_, r)| r.len() != SIZE) {
            return Err(PuzzleError::invalid(format!(
                "row {} has {} cells, expected {}",
                ix + 1,
                row.len(),
                SIZE
            )));
        }

        let flat: Vec<u8> = from.into_iter().flatten().collect();
        Grid::from_cells(&flat)
    }

    /// Builds a grid from nine row-major cells.
    pub fn from_cells(cells: &[u8]) -> Result<Grid, PuzzleError> {
        if cells.len() != CELLS {
            return Err(PuzzleError::invalid(format!(
                "expected {} cells, got {}",
                CELLS,
                cells.len()
            )));
        }

        let mut seen = [false; CELLS];
        for &c in cells {
            let slot = seen.get_mut(c as usize).ok_or_else(|| {
                PuzzleError::invalid(format!("value {} is outside 0-{}", c, CELLS - 1))
            })?;

            if *slot {
                return Err(PuzzleError::invalid(format!("value {} appears twice", c)));
            }
            *slot = true;
        }

        // nine distinct values in 0..=8 is a full permutation, blank included
        let mut result = Grid { cells: [BLANK; CELLS] };
        result.cells.copy_from_slice(cells);
        Ok(result)
    }

    pub fn canonicalize(&self) -> CanonicalKey {
        self.cells
    }

    pub fn decode(key: CanonicalKey) -> Result<Grid, PuzzleError> {
        Grid::from_cells(&key)
    }

    pub fn blank_position(&self) -> Result<(usize, usize), PuzzleError> {
        self.cells
            .iter()
            .position(|&c| c == BLANK)
            .map(|ix| (ix / SIZE, ix % SIZE))
            .ok_or(PuzzleError::MissingBlank)
    }

    pub fn is_goal(&self) -> bool {
        *self == GOAL
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(SIZE)
    }

    // NB: callers are responsible for both positions being on the board
    pub(crate) fn swapped(&self, a: (usize, usize), b: (usize, usize)) -> Grid {
        let mut result = *self;
        result.cells.swap(a.0 * SIZE + a.1, b.0 * SIZE + b.1);
        result
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = u8;
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.cells[index.0 * SIZE + index.1]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for line in self.rows() {
            if !first {
                f.write_char('\n')?;
            } else {
                first = false;
            }

            for (ix, c) in line.iter().enumerate() {
                if ix > 0 {
                    f.write_char(' ')?;
                }

                f.write_char(if *c == BLANK {
                    '_'
                } else {
                    (b'0' + c) as char
                })?;
            }
        }

        Ok(())
    }
}

/// Parses nine integers separated by whitespace, commas or `/`.
impl FromStr for Grid {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
            .filter(|tok| !tok.is_empty())
            .map(|tok| {
                tok.parse::<u8>()
                    .map_err(|_| PuzzleError::invalid(format!("'{}' is not a tile number", tok)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Grid::from_cells(&cells)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn canonical_key_is_row_major() {
        let g = Grid::new(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]]).unwrap();
        assert_eq!(g.canonicalize(), [1, 2, 3, 4, 5, 6, 7, 0, 8]);
        assert_eq!(g[(2, 1)], 0);
        assert_eq!(g[(2, 2)], 8);
    }

    #[test]
    fn decode_inverts_canonicalize() {
        let g: Grid = "8 6 7 2 5 4 3 0 1".parse().unwrap();
        let key = g.canonicalize();
        assert_eq!(Grid::decode(key).unwrap(), g);
        assert_eq!(Grid::decode(key).unwrap().canonicalize(), key);
    }

    #[test]
    fn blank_position_is_found() {
        assert_eq!(GOAL.blank_position(), Ok((2, 2)));
        let g: Grid = "1 2 3 / 0 4 6 / 7 5 8".parse().unwrap();
        assert_eq!(g.blank_position(), Ok((1, 0)));
    }

    #[test]
    fn rejects_malformed_grids() {
        assert!(matches!(
            Grid::new(vec![vec![1, 2, 3], vec![4, 5, 6]]),
            Err(PuzzleError::InvalidGrid { .. })
        ));
        assert!(matches!(
            Grid::new(vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8, 0]]),
            Err(PuzzleError::InvalidGrid { .. })
        ));
        assert!(matches!(
            "1 2 3 4 5 6 7 8 8".parse::<Grid>(),
            Err(PuzzleError::InvalidGrid { .. })
        ));
        assert!(matches!(
            "1 2 3 4 5 6 7 8 9".parse::<Grid>(),
            Err(PuzzleError::InvalidGrid { .. })
        ));
        assert!(matches!(
            "1 2 3 4 5 6 7 8".parse::<Grid>(),
            Err(PuzzleError::InvalidGrid { .. })
        ));
        assert!(matches!(
            "1 2 3 4 x 6 7 8 0".parse::<Grid>(),
            Err(PuzzleError::InvalidGrid { .. })
        ));
    }

    #[test]
    fn parses_separators() {
        let a: Grid = "1,2,3,4,5,6,7,8,0".parse().unwrap();
        let b: Grid = "1 2 3/4 5 6/7 8 0".parse().unwrap();
        assert_eq!(a, GOAL);
        assert_eq!(b, GOAL);
        assert!(a.is_goal());
    }

    #[test]
    fn displays_rows() {
        assert_eq!(GOAL.to_string(), "1 2 3\n4 5 6\n7 8 _");
    }
}
