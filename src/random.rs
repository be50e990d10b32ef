//! Seedable random sources.
//!
//! Every stochastic step of the solver (individual generation, tournament
//! sampling, crossover cut points, mutation) draws from one RNG created here,
//! so a fixed seed reproduces a run exactly.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a deterministic RNG from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an RNG from `seed`, or from fresh OS entropy when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => create_rng(s),
        None => create_rng(rand::random()),
    }
}

/// Shuffles a slice in place (Fisher–Yates).
pub fn shuffle<T, R: Rng + ?Sized>(slice: &mut [T], rng: &mut R) {
    slice.shuffle(rng);
}
