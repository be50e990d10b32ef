//! Random board generation.

use super::solvability::is_solvable_for;
use super::state::{State, CELLS};
use crate::random::shuffle;
use rand::Rng;

/// A uniformly random permutation, solvable or not.
pub fn random_state<R: Rng + ?Sized>(rng: &mut R) -> State {
    let mut tiles = [0u8; CELLS];
    for (i, t) in tiles.iter_mut().enumerate() {
        *t = i as u8;
    }
    shuffle(&mut tiles, rng);
    State::from_permutation(tiles)
}

/// A uniformly random state in the same parity class as `goal`.
///
/// Rejection sampling: half of all permutations qualify, so two draws are
/// needed on average.
pub fn random_solvable_state<R: Rng + ?Sized>(goal: &State, rng: &mut R) -> State {
    loop {
        let candidate = random_state(rng);
        if is_solvable_for(&candidate, goal) {
            return candidate;
        }
    }
}
