//! Solver configuration.

use super::fitness::Heuristic;
use super::state::State;
use crate::error::Result;
use crate::ga::GaConfig;

/// Everything a solver run needs, fixed before the run starts.
///
/// ```
/// use puzzle8_ga::puzzle::{Heuristic, SolverConfig, State};
///
/// let config = SolverConfig::default()
///     .with_heuristic(Heuristic::Misplaced)
///     .with_random_start();
/// assert_eq!(config.goal, State::solved());
/// assert!(config.initial_state.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Target arrangement.
    pub goal: State,

    /// Fixed first member of the initial population; `None` starts fully random.
    ///
    /// When deserializing, a missing field means `None`, so a config file
    /// without `initial_state` asks for a random start.
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial_state: Option<State>,

    /// Fitness strategy for the whole run.
    pub heuristic: Heuristic,

    /// Evolutionary parameters.
    pub ga: GaConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            goal: State::solved(),
            initial_state: Some(State::from_permutation([1, 4, 2, 3, 5, 0, 6, 7, 8])),
            heuristic: Heuristic::Manhattan,
            ga: GaConfig::default(),
        }
    }
}

impl SolverConfig {
    /// Sets the goal arrangement.
    pub fn with_goal(mut self, goal: State) -> Self {
        self.goal = goal;
        self
    }

    /// Seeds the population with a fixed starting arrangement.
    pub fn with_initial_state(mut self, state: State) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Builds the whole initial population at random.
    pub fn with_random_start(mut self) -> Self {
        self.initial_state = None;
        self
    }

    /// Sets the fitness heuristic.
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Replaces the evolutionary parameters.
    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    /// Validates the evolutionary parameters.
    ///
    /// Solvability of the initial state is checked when the problem is built.
    pub fn validate(&self) -> Result<()> {
        self.ga.validate()
    }
}
