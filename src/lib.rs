//! Genetic-algorithm solver for the 8-puzzle.
//!
//! Evolves a population of tile permutations toward a goal arrangement:
//!
//! - **GA engine** ([`ga`]): generic generational loop with pluggable
//!   problems, two-parent tournament selection, permutation crossover and
//!   mutation operators.
//! - **Puzzle** ([`puzzle`]): board states, inversion-parity solvability,
//!   misplaced-tiles and Manhattan heuristics, and the [`puzzle::solve`]
//!   entry point.
//! - **Random** ([`random`]): seedable RNGs so runs are reproducible.
//!
//! # Example
//!
//! ```
//! use puzzle8_ga::ga::GaConfig;
//! use puzzle8_ga::puzzle::{solve, SolverConfig};
//!
//! let config = SolverConfig::default()
//!     .with_ga(GaConfig::default().with_population_size(50).with_seed(42));
//! let report = solve(&config)?;
//! if let Some(board) = report.solution() {
//!     println!("solved in generation {:?}:\n{}", report.solved_at(), board.grid());
//! }
//! # Ok::<(), puzzle8_ga::SolverError>(())
//! ```
//!
//! The search is not complete or optimal: it reports failure once the
//! generation limit is reached.

mod error;
pub mod ga;
pub mod puzzle;
pub mod random;

pub use error::{Result, SolverError};
