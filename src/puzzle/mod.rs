//! The 8-puzzle solved by the GA engine.
//!
//! A board is a [`State`]; [`PuzzleProblem`] plugs it into
//! [`GaRunner`](crate::ga::GaRunner) with:
//!
//! - random solvable boards as individuals ([`generator`])
//! - [`Heuristic::Manhattan`] or [`Heuristic::Misplaced`] fitness ([`fitness`])
//! - one-point order crossover and swap mutation
//! - success as soon as some board scores 0
//!
//! [`solve`] is the entry point. A fixed initial state outside the goal's
//! parity class aborts the run before any population exists
//! ([`solvability`]).
//!
//! Crossover children are not filtered for solvability, so part of the
//! population can drift into the unreachable class. The search is therefore
//! incomplete: exhausting the generation limit says nothing about whether a
//! solution exists.

mod config;
pub mod fitness;
pub mod generator;
mod problem;
pub mod solvability;
mod state;

pub use config::SolverConfig;
pub use fitness::{Goal, Heuristic};
pub use problem::{Candidate, PuzzleProblem};
pub use state::{cell, State, BLANK, CELLS, SIDE};

use crate::error::Result;
use crate::ga::{GaRunner, GenerationStats, Individual, Termination};
use crate::random::rng_from_seed;
use log::{info, warn};
use rand::Rng;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Outcome of a solver run.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    /// Why the run stopped.
    pub termination: Termination,

    /// Best board of the last evaluated generation (the goal on success).
    pub best: State,

    /// Fitness of `best`.
    pub best_fitness: u32,

    /// Number of generations evaluated.
    pub generations: usize,

    /// Best fitness of each evaluated generation.
    pub fitness_history: Vec<u32>,
}

impl SolveReport {
    /// The goal-reaching board, if the run succeeded.
    pub fn solution(&self) -> Option<&State> {
        (self.termination == Termination::Solved).then_some(&self.best)
    }

    /// Generation index in which the solution appeared.
    pub fn solved_at(&self) -> Option<usize> {
        (self.termination == Termination::Solved).then(|| self.generations - 1)
    }
}

/// Runs the solver with an RNG derived from the configured seed.
///
/// ```
/// use puzzle8_ga::ga::GaConfig;
/// use puzzle8_ga::puzzle::{solve, SolverConfig, State};
///
/// let config = SolverConfig::default()
///     .with_ga(GaConfig::default().with_population_size(50).with_seed(1));
/// let report = solve(&config).unwrap();
/// assert_eq!(report.solution(), Some(&State::solved()));
/// ```
pub fn solve(config: &SolverConfig) -> Result<SolveReport> {
    solve_with_observer(config, None, |_| {})
}

/// Runs the solver, reporting every evaluated generation to `observer`.
pub fn solve_with_observer<F>(
    config: &SolverConfig,
    cancel: Option<Arc<AtomicBool>>,
    observer: F,
) -> Result<SolveReport>
where
    F: FnMut(&GenerationStats<'_, Candidate>),
{
    let mut rng = rng_from_seed(config.ga.seed);
    solve_with_rng(config, &mut rng, cancel, observer)
}

/// Runs the solver drawing all randomness from `rng`.
pub fn solve_with_rng<R, F>(
    config: &SolverConfig,
    rng: &mut R,
    cancel: Option<Arc<AtomicBool>>,
    observer: F,
) -> Result<SolveReport>
where
    R: Rng,
    F: FnMut(&GenerationStats<'_, Candidate>),
{
    config.validate()?;
    let problem = PuzzleProblem::from_config(config).inspect_err(|e| warn!("aborting: {e}"))?;

    info!(
        "solving for goal {} with {:?} fitness, population {}, up to {} generation(s)",
        config.goal, config.heuristic, config.ga.population_size, config.ga.max_generations
    );

    let result = GaRunner::run_with_rng(&problem, &config.ga, rng, cancel, observer)?;

    Ok(SolveReport {
        termination: result.termination,
        best_fitness: result.best.fitness(),
        generations: result.generations,
        fitness_history: result.fitness_history.iter().map(|&f| f as u32).collect(),
        best: result.best.into_state(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolverError;
    use crate::ga::GaConfig;

    fn state(tiles: [u8; 9]) -> State {
        State::new(tiles).unwrap()
    }

    fn small(seed: u64) -> GaConfig {
        GaConfig::default()
            .with_population_size(50)
            .with_max_generations(1000)
            .with_seed(seed)
    }

    #[test]
    fn test_reference_start_reaches_goal() {
        let config = SolverConfig::default()
            .with_initial_state(state([1, 4, 2, 3, 5, 0, 6, 7, 8]))
            .with_ga(small(42));

        let report = solve(&config).unwrap();

        assert_eq!(report.termination, Termination::Solved);
        assert_eq!(report.solution(), Some(&State::solved()));
        assert_eq!(report.best_fitness, 0);
        assert_eq!(report.solved_at(), Some(report.generations - 1));
        assert_eq!(report.fitness_history.last(), Some(&0));
    }

    #[test]
    fn test_misplaced_heuristic_reaches_goal() {
        let config = SolverConfig::default()
            .with_heuristic(Heuristic::Misplaced)
            .with_ga(small(7).with_population_size(100).with_max_generations(2000));

        let report = solve(&config).unwrap();
        assert_eq!(report.solution(), Some(&State::solved()));
    }

    #[test]
    fn test_random_start_reaches_goal() {
        let config = SolverConfig::default()
            .with_random_start()
            .with_ga(small(3).with_max_generations(2000));

        let report = solve(&config).unwrap();
        assert!(report.solution().is_some());
    }

    #[test]
    fn test_unsolvable_start_aborts_without_generations() {
        // [1,4,2,3,5,0,6,7,8] with tiles 1 and 4 exchanged.
        let start = state([4, 1, 2, 3, 5, 0, 6, 7, 8]);
        let config = SolverConfig::default().with_initial_state(start).with_ga(small(1));
        let mut generations_seen = 0;

        let err = solve_with_observer(&config, None, |_| generations_seen += 1).unwrap_err();

        assert_eq!(err, SolverError::UnsolvableInitialState { state: start });
        assert_eq!(generations_seen, 0);
    }

    #[test]
    fn test_zero_generations_reports_exhaustion() {
        let config = SolverConfig::default()
            .with_random_start()
            .with_goal(state([8, 1, 3, 4, 0, 2, 7, 6, 5]))
            .with_ga(small(5).with_max_generations(0));
        let mut seen = Vec::new();

        let report = solve_with_observer(&config, None, |stats| seen.push(stats.generation)).unwrap();

        assert_eq!(seen, vec![0]);
        assert_eq!(report.generations, 1);
        assert_eq!(report.fitness_history.len(), 1);
        assert!(report.best_fitness > 0);
        assert_eq!(report.termination, Termination::Exhausted);
        assert!(report.solution().is_none());
    }

    #[test]
    fn test_seeded_goal_is_found_in_generation_zero() {
        let config = SolverConfig::default()
            .with_initial_state(State::solved())
            .with_ga(small(8).with_max_generations(0));

        let report = solve(&config).unwrap();
        assert_eq!(report.solved_at(), Some(0));
    }

    #[test]
    fn test_same_seed_same_progress() {
        let config = SolverConfig::default()
            .with_random_start()
            .with_ga(small(2024).with_max_generations(60));

        let mut first = Vec::new();
        let a = solve_with_observer(&config, None, |s| first.push((s.best_fitness, *s.best.state())))
            .unwrap();
        let mut second = Vec::new();
        let b = solve_with_observer(&config, None, |s| second.push((s.best_fitness, *s.best.state())))
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(a, b);
    }

    #[test]
    fn test_injected_rng_drives_the_run() {
        let config = SolverConfig::default()
            .with_random_start()
            .with_ga(GaConfig::default().with_population_size(30).with_max_generations(20));

        let a = solve_with_rng(&config, &mut crate::random::create_rng(99), None, |_| {}).unwrap();
        let b = solve_with_rng(&config, &mut crate::random::create_rng(99), None, |_| {}).unwrap();
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_non_canonical_goal() {
        let goal = state([0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let start = state([1, 0, 2, 3, 4, 5, 6, 7, 8]);
        let config = SolverConfig::default()
            .with_goal(goal)
            .with_initial_state(start)
            .with_ga(small(11));

        let report = solve(&config).unwrap();
        assert_eq!(report.solution(), Some(&goal));
    }

    #[test]
    fn test_invalid_parameters_are_rejected() {
        let config = SolverConfig::default()
            .with_ga(GaConfig::default().with_population_size(3).with_tournament_size(5));
        assert!(matches!(solve(&config), Err(SolverError::InvalidConfig(_))));
    }
}
