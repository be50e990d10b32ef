//! Genetic Algorithm engine.
//!
//! A generic GA built on trait-based abstractions. A problem plugs in by
//! implementing [`GaProblem`], which specifies how to create, evaluate,
//! recombine, and mutate individuals and when a fitness is optimal.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with associated fitness type
//! - [`GaProblem`]: Problem definition — initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population, tournament, mutation, seed)
//! - [`Tournament`]: Two-parent tournament selection without replacement
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Final result with [`Termination`] reason and history
//!
//! # Submodules
//!
//! - [`operators`]: Permutation order crossover and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner, GenerationStats, Termination};
pub use selection::Tournament;
pub use types::{Fitness, GaProblem, Individual};
