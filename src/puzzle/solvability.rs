//! Reachability by inversion parity.
//!
//! On a board of odd width a slide either keeps tile order (horizontal
//! move) or moves one tile past an even number of others (vertical move),
//! so the parity of the inversion count never changes. Two arrangements are
//! mutually reachable exactly when their parities agree.

use super::state::{State, BLANK};

/// Counts pairs `(i, j)`, `i < j`, of non-blank tiles with `tiles[i] > tiles[j]`.
pub fn inversions(state: &State) -> usize {
    let tiles = state.tiles();
    let mut count = 0;
    for i in 0..tiles.len() {
        if tiles[i] == BLANK {
            continue;
        }
        for &later in &tiles[i + 1..] {
            if later != BLANK && tiles[i] > later {
                count += 1;
            }
        }
    }
    count
}

/// Solvable relative to the canonical goal `1..8, _`: even inversion count.
pub fn is_solvable(state: &State) -> bool {
    inversions(state) % 2 == 0
}

/// Solvable relative to an arbitrary goal: same inversion parity.
///
/// Equals [`is_solvable`] when `goal` is the canonical arrangement.
pub fn is_solvable_for(state: &State, goal: &State) -> bool {
    inversions(state) % 2 == inversions(goal) % 2
}
