//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → (termination | reproduction) → evaluation …
//!
//! Each generation is fully replaced by offspring: there is no elitism, so
//! the best fitness of successive generations may go up as well as down.

use super::config::GaConfig;
use super::selection::Tournament;
use super::types::{Fitness, GaProblem, Individual};
use crate::error::Result;
use crate::random::rng_from_seed;
use log::{debug, info};
use rand::Rng;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// An individual reached optimal fitness.
    Solved,
    /// The generation ceiling was reached first.
    Exhausted,
    /// The cancel flag was raised.
    Cancelled,
}

/// Snapshot of one evaluated generation, handed to observers.
#[derive(Debug, Clone)]
pub struct GenerationStats<'a, I: Individual> {
    /// Zero-based generation index.
    pub generation: usize,

    /// Fittest individual of the generation.
    pub best: &'a I,

    /// Fitness of `best`.
    pub best_fitness: I::Fitness,

    /// Mean fitness across the population.
    pub mean_fitness: f64,
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// Best individual of the last evaluated generation.
    pub best: I,

    /// Fitness of `best`.
    pub best_fitness: I::Fitness,

    /// Number of generations evaluated.
    ///
    /// On [`Termination::Solved`] the solution was found in generation
    /// `generations - 1`.
    pub generations: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Best fitness of each evaluated generation.
    pub fitness_history: Vec<f64>,
}

impl<I: Individual> GaResult<I> {
    /// Returns `true` if the run ended with an optimal individual.
    pub fn is_solved(&self) -> bool {
        self.termination == Termination::Solved
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with an RNG derived from [`GaConfig::seed`].
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult<P::Individual>> {
        Self::run_with_observer(problem, config, None, |_| {})
    }

    /// Runs the GA, reporting every evaluated generation to `observer`.
    ///
    /// If `cancel` is `Some` and the flag is set, the run stops before the
    /// next generation is evaluated and returns [`Termination::Cancelled`].
    pub fn run_with_observer<P, F>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
        observer: F,
    ) -> Result<GaResult<P::Individual>>
    where
        P: GaProblem,
        F: FnMut(&GenerationStats<'_, P::Individual>),
    {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng, cancel, observer)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// The configuration is validated before any individual is created.
    pub fn run_with_rng<P, R, F>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
        mut observer: F,
    ) -> Result<GaResult<P::Individual>>
    where
        P: GaProblem,
        R: Rng,
        F: FnMut(&GenerationStats<'_, P::Individual>),
    {
        config.validate()?;

        let tournament = Tournament::new(config.tournament_size);

        // 1. Initialize population: fixed seeds first, then random fill
        let mut population = problem.seed_individuals();
        population.truncate(config.population_size);
        while population.len() < config.population_size {
            population.push(problem.create_individual(rng));
        }

        let mut fitness_history = Vec::new();
        let mut generation = 0usize;

        // 2. Evolutionary loop
        loop {
            // Evaluate and rank (ascending = best first)
            evaluate_population(problem, &mut population, config.parallel);
            population.sort_by(|a, b| {
                a.fitness()
                    .partial_cmp(&b.fitness())
                    .unwrap_or(Ordering::Equal)
            });

            let best_fitness = population[0].fitness();
            fitness_history.push(best_fitness.to_f64());

            let stats = GenerationStats {
                generation,
                best: &population[0],
                best_fitness,
                mean_fitness: mean_fitness(&population),
            };
            debug!(
                "generation {} best={:?} mean={:.3}",
                generation, best_fitness, stats.mean_fitness
            );
            observer(&stats);

            let termination = if problem.is_optimal(best_fitness) {
                Some(Termination::Solved)
            } else if generation + 1 >= config.max_generations {
                Some(Termination::Exhausted)
            } else if cancel
                .as_ref()
                .is_some_and(|flag| flag.load(AtomicOrdering::Relaxed))
            {
                Some(Termination::Cancelled)
            } else {
                None
            };

            if let Some(termination) = termination {
                info!(
                    "GA stopped after {} generation(s): {:?}, best fitness {:?}",
                    generation + 1,
                    termination,
                    best_fitness
                );
                let best = population.swap_remove(0);
                return Ok(GaResult {
                    best_fitness: best.fitness(),
                    best,
                    generations: generation + 1,
                    termination,
                    fitness_history,
                });
            }

            // 3. Reproduce: full replacement from the ranked population
            let mut next_gen: Vec<P::Individual> = Vec::with_capacity(config.population_size);
            while next_gen.len() < config.population_size {
                let (p1_idx, p2_idx) = tournament.select_pair(&population, rng);
                let children = problem.crossover(&population[p1_idx], &population[p2_idx], rng);

                for mut child in children {
                    if next_gen.len() >= config.population_size {
                        break;
                    }
                    if rng.random_range(0.0..1.0) < config.mutation_rate {
                        problem.mutate(&mut child, rng);
                    }
                    next_gen.push(child);
                }
            }

            population = next_gen;
            generation += 1;
        }
    }
}

/// Evaluate all individuals in the population.
///
/// Evaluation is pure, so running it in parallel leaves every fitness
/// (and therefore every seeded run) unchanged.
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if parallel {
            population.par_iter_mut().for_each(|ind| {
                let f = problem.evaluate(ind);
                ind.set_fitness(f);
            });
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

fn mean_fitness<I: Individual>(population: &[I]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    let total: f64 = population.iter().map(|ind| ind.fitness().to_f64()).sum();
    total / population.len() as f64
}

// ============================================================================
// Tests
// ============================================================================
