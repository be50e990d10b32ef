//! Error taxonomy for solver runs.
//!
//! Only configuration problems are errors. Running out of generations or
//! being cancelled are ordinary outcomes reported through
//! [`Termination`](crate::ga::Termination).

use thiserror::Error;

use crate::puzzle::State;

/// Errors that abort a run before any population is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// An engine parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A tile sequence is not a permutation of 0..8.
    #[error("invalid state {tiles:?}: expected a permutation of 0..8")]
    InvalidState { tiles: Vec<u8> },

    /// Text that does not read as a list of tile numbers.
    #[error("cannot parse state {input:?}: {reason}")]
    ParseState { input: String, reason: String },

    /// The fixed initial state lies in the other parity class than the goal.
    #[error("initial state {state} is not solvable for the configured goal")]
    UnsolvableInitialState { state: State },
}

pub type Result<T> = std::result::Result<T, SolverError>;
