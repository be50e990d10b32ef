//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{Result, SolverError};

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, tournament size, mutation rate, the generation
/// ceiling, parallel evaluation, and the random seed.
///
/// # Defaults
///
/// ```
/// use puzzle8_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 150);
/// assert_eq!(config.max_generations, 2000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use puzzle8_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_tournament_size(4)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Generation ceiling.
    ///
    /// Generations `0..max_generations` are evaluated; `0` evaluates only
    /// the initial population and then reports exhaustion.
    pub max_generations: usize,

    /// Number of distinct individuals sampled per tournament.
    ///
    /// The two fittest of the sample become the parents, so this must be at
    /// least 2 and no larger than the population.
    pub tournament_size: usize,

    /// Probability of mutating each child (0.0–1.0).
    pub mutation_rate: f64,

    /// Whether to evaluate individuals in parallel (requires the `parallel` feature).
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 150,
            max_generations: 2000,
            tournament_size: 5,
            mutation_rate: 0.1,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`SolverError::InvalidConfig`] describing the first invalid parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(SolverError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if self.tournament_size < 2 {
            return Err(SolverError::InvalidConfig(
                "tournament_size must be at least 2".into(),
            ));
        }
        if self.tournament_size > self.population_size {
            return Err(SolverError::InvalidConfig(format!(
                "tournament_size ({}) must not exceed population_size ({})",
                self.tournament_size, self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(SolverError::InvalidConfig(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}
