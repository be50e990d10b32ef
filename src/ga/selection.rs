//! Tournament selection.
//!
//! A tournament draws `k` distinct individuals uniformly at random from the
//! population, ranks them by fitness, and returns the two best as parents.
//! Larger `k` gives stronger selection pressure.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Individual;
use rand::seq::index;
use rand::Rng;
use std::cmp::Ordering;

/// Tournament selection without replacement.
///
/// All comparisons assume **minimization** (lower fitness = better).
///
/// # Examples
///
/// ```
/// use puzzle8_ga::ga::Tournament;
///
/// let tournament = Tournament::new(5);
/// assert_eq!(tournament.size(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tournament {
    size: usize,
}

impl Default for Tournament {
    fn default() -> Self {
        Tournament::new(5)
    }
}

impl Tournament {
    /// Creates a tournament of `size` contestants.
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Number of contestants per tournament.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Runs one tournament and returns the population indices of the best
    /// and second-best contestants.
    ///
    /// Contestants are sampled without replacement, so the two indices are
    /// always distinct slots, even when their values are equal. Fitness
    /// ties keep sampling order.
    ///
    /// # Complexity
    /// O(k log k) per call
    ///
    /// # Panics
    /// Panics if the tournament size is below 2 or exceeds the population.
    pub fn select_pair<I: Individual, R: Rng + ?Sized>(
        &self,
        population: &[I],
        rng: &mut R,
    ) -> (usize, usize) {
        assert!(self.size >= 2, "tournament needs at least 2 contestants");
        assert!(
            population.len() >= self.size,
            "population smaller than tournament"
        );

        let mut contestants = index::sample(rng, population.len(), self.size).into_vec();
        contestants.sort_by(|&a, &b| {
            population[a]
                .fitness()
                .partial_cmp(&population[b].fitness())
                .unwrap_or(Ordering::Equal)
        });

        (contestants[0], contestants[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[derive(Clone)]
    struct TestInd {
        fit: u32,
    }

    impl Individual for TestInd {
        type Fitness = u32;
        fn fitness(&self) -> u32 {
            self.fit
        }
        fn set_fitness(&mut self, f: u32) {
            self.fit = f;
        }
    }

    fn make_population(fitnesses: &[u32]) -> Vec<TestInd> {
        fitnesses.iter().map(|&f| TestInd { fit: f }).collect()
    }

    #[test]
    fn test_full_tournament_returns_two_best() {
        let pop = make_population(&[10, 5, 1, 8, 3]);
        let mut rng = create_rng(42);

        for _ in 0..200 {
            let (a, b) = Tournament::new(5).select_pair(&pop, &mut rng);
            assert_eq!(a, 2);
            assert_eq!(b, 4);
        }
    }

    #[test]
    fn test_pair_is_distinct_and_ordered() {
        let pop = make_population(&[4, 4, 2, 9, 0, 7, 4, 1]);
        let mut rng = create_rng(7);

        for _ in 0..1000 {
            let (a, b) = Tournament::new(3).select_pair(&pop, &mut rng);
            assert_ne!(a, b, "parents must be different slots");
            assert!(pop[a].fitness() <= pop[b].fitness());
        }
    }

    #[test]
    fn test_worst_two_never_win() {
        // Any 3 of 4 contain two individuals fitter than the worst one.
        let pop = make_population(&[1, 2, 3, 4]);
        let mut rng = create_rng(3);

        for _ in 0..1000 {
            let (a, b) = Tournament::new(3).select_pair(&pop, &mut rng);
            assert_ne!(a, 3);
            assert_ne!(b, 3);
        }
    }

    #[test]
    fn test_equal_fitness_is_roughly_uniform() {
        let pop = make_population(&[5, 5, 5, 5]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            let (a, _) = Tournament::new(2).select_pair(&pop, &mut rng);
            counts[a] += 1;
        }
        for &c in &counts {
            assert!(
                c > 1500,
                "expected roughly uniform with equal fitness, got {counts:?}"
            );
        }
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[10, 5, 1, 8, 6, 9, 7, 4]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 8];
        let n = 10000;
        for _ in 0..n {
            let (a, _) = Tournament::new(4).select_pair(&pop, &mut rng);
            counts[a] += 1;
        }
        // Index 2 wins whenever it is sampled: 4 of 8 slots.
        let best_count = counts[2];
        assert!(
            best_count > 4500,
            "expected best to win about half the tournaments, got {best_count}/{n}"
        );
    }

    #[test]
    #[should_panic(expected = "population smaller than tournament")]
    fn test_small_population_panics() {
        let pop = make_population(&[1, 2]);
        let mut rng = create_rng(42);
        Tournament::new(3).select_pair(&pop, &mut rng);
    }

    #[test]
    #[should_panic(expected = "at least 2 contestants")]
    fn test_single_contestant_panics() {
        let pop = make_population(&[1, 2, 3]);
        let mut rng = create_rng(42);
        Tournament::new(1).select_pair(&pop, &mut rng);
    }
}
