//! Core trait definitions for the GA engine.
//!
//! [`Individual`] and [`GaProblem`] form the contract between the generic
//! evolutionary loop and a concrete problem such as the 8-puzzle.

use rand::Rng;

/// Marker trait for fitness values.
///
/// Lower fitness is better (minimization). Fitness must be totally
/// comparable in practice and cheap to copy.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Returns a value representing the worst possible fitness.
    ///
    /// Used for individuals that have not been evaluated yet.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for u32 {
    fn worst() -> Self {
        u32::MAX
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// A candidate solution in the GA population.
///
/// Individuals carry their own fitness. The runner calls
/// [`GaProblem::evaluate`] once per generation and stores the result via
/// [`set_fitness`](Individual::set_fitness), so ranking and selection within
/// a generation never re-evaluate.
pub trait Individual: Clone + Send + Sync {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the current fitness of this individual.
    fn fitness(&self) -> Self::Fitness;

    /// Sets the fitness of this individual.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// Defines a GA optimization problem.
///
/// The problem supplies the representation-specific pieces:
///
/// 1. **Initialization**: fixed seed individuals and random individuals
/// 2. **Evaluation**: fitness of one individual
/// 3. **Crossover**: recombination of two parents
/// 4. **Mutation**: perturbation of one child
/// 5. **Optimality**: when a fitness ends the search early
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate
/// individuals in parallel with the `parallel` feature.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Individuals that must appear at the front of the initial population.
    ///
    /// The runner fills the remainder with [`create_individual`](Self::create_individual).
    /// Any surplus beyond the population size is dropped.
    fn seed_individuals(&self) -> Vec<Self::Individual> {
        Vec::new()
    }

    /// Creates a random, valid individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual and returns its fitness. Must be pure.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Produces offspring by recombining two parents.
    ///
    /// Returns one or more children; the runner stops taking children once
    /// the next generation is full. The default clones `parent1`.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Vec<Self::Individual> {
        vec![parent1.clone()]
    }

    /// Mutates an individual in place.
    ///
    /// Called by the runner with probability
    /// [`GaConfig::mutation_rate`](super::GaConfig::mutation_rate). The
    /// default is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Returns `true` when `fitness` cannot be improved and the search should stop.
    ///
    /// The default never stops early.
    fn is_optimal(&self, _fitness: <Self::Individual as Individual>::Fitness) -> bool {
        false
    }
}
