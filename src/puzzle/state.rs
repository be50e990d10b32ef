//! Board representation.

use crate::error::{Result, SolverError};
use crate::ga::operators::is_permutation;
use std::fmt;
use std::str::FromStr;

/// Width and height of the board.
pub const SIDE: usize = 3;

/// Number of cells (and tiles, counting the blank).
pub const CELLS: usize = SIDE * SIDE;

/// The blank tile.
pub const BLANK: u8 = 0;

/// Returns the `(row, col)` of a cell index in row-major order.
#[inline]
pub fn cell(index: usize) -> (usize, usize) {
    (index / SIDE, index % SIDE)
}

/// One arrangement of the 8-puzzle: a permutation of `0..=8` in row-major
/// order, `0` being the blank.
///
/// Every `State` is a valid permutation; the constructors reject anything
/// else.
///
/// ```
/// use puzzle8_ga::puzzle::State;
///
/// let state: State = "1,4,2,3,5,0,6,7,8".parse().unwrap();
/// assert_eq!(state.blank_index(), 5);
/// assert!("1,1,2,3,4,5,6,7,8".parse::<State>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u8>", into = "Vec<u8>"))]
pub struct State([u8; CELLS]);

impl State {
    /// Builds a state, checking that `tiles` is a permutation of `0..=8`.
    pub fn new(tiles: [u8; CELLS]) -> Result<Self> {
        if is_permutation(&tiles[..]) {
            Ok(Self(tiles))
        } else {
            Err(SolverError::InvalidState {
                tiles: tiles.to_vec(),
            })
        }
    }

    /// Builds a state from a slice of exactly nine tiles.
    pub fn from_slice(tiles: &[u8]) -> Result<Self> {
        let array: [u8; CELLS] = tiles.try_into().map_err(|_| SolverError::InvalidState {
            tiles: tiles.to_vec(),
        })?;
        Self::new(array)
    }

    /// Wraps tiles already known to form a permutation.
    pub(crate) fn from_permutation(tiles: [u8; CELLS]) -> Self {
        debug_assert!(is_permutation(&tiles[..]), "not a permutation: {tiles:?}");
        Self(tiles)
    }

    /// The canonical solved arrangement `1 2 3 / 4 5 6 / 7 8 _`.
    pub fn solved() -> Self {
        Self([1, 2, 3, 4, 5, 6, 7, 8, BLANK])
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.0
    }

    /// Mutable access for operators that preserve the permutation (swaps).
    pub(crate) fn tiles_mut(&mut self) -> &mut [u8; CELLS] {
        &mut self.0
    }

    /// Cell index of the blank.
    pub fn blank_index(&self) -> usize {
        self.0
            .iter()
            .position(|&t| t == BLANK)
            .unwrap_or_else(|| unreachable!("a State always holds the blank"))
    }

    /// States reachable by sliding one tile into the blank.
    pub fn neighbors(&self) -> Vec<State> {
        let blank = self.blank_index();
        let (row, col) = cell(blank);
        let mut out = Vec::with_capacity(4);

        let mut slide = |from: usize| {
            let mut next = *self;
            next.0.swap(blank, from);
            out.push(next);
        };
        if row > 0 {
            slide(blank - SIDE);
        }
        if row + 1 < SIDE {
            slide(blank + SIDE);
        }
        if col > 0 {
            slide(blank - 1);
        }
        if col + 1 < SIDE {
            slide(blank + 1);
        }
        out
    }

    /// Renders the board as three text rows, blank shown as `_`.
    pub fn grid(&self) -> String {
        self.0
            .chunks(SIDE)
            .map(|row| {
                row.iter()
                    .map(|&t| {
                        if t == BLANK {
                            "_".to_string()
                        } else {
                            t.to_string()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for State {
    fn default() -> Self {
        Self::solved()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl FromStr for State {
    type Err = SolverError;

    /// Parses nine integers separated by commas and/or whitespace,
    /// optionally wrapped in brackets: `"[1, 4, 2, 3, 5, 0, 6, 7, 8]"`.
    fn from_str(s: &str) -> Result<Self> {
        let body = s.trim().trim_start_matches('[').trim_end_matches(']');
        let tiles = body
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .map(|tok| tok.parse::<u8>())
            .collect::<std::result::Result<Vec<u8>, _>>()
            .map_err(|e| SolverError::ParseState {
                input: s.to_string(),
                reason: e.to_string(),
            })?;
        Self::from_slice(&tiles)
    }
}

impl TryFrom<Vec<u8>> for State {
    type Error = SolverError;

    fn try_from(tiles: Vec<u8>) -> Result<Self> {
        Self::from_slice(&tiles)
    }
}

impl From<State> for Vec<u8> {
    fn from(state: State) -> Self {
        state.0.to_vec()
    }
}
