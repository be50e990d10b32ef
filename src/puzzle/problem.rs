//! The 8-puzzle expressed as a [`GaProblem`].

use super::config::SolverConfig;
use super::fitness::{Goal, Heuristic};
use super::generator::random_solvable_state;
use super::solvability::is_solvable_for;
use super::state::{State, CELLS};
use crate::error::{Result, SolverError};
use crate::ga::operators::{one_point_order_crossover, swap_mutation};
use crate::ga::{Fitness, GaProblem, Individual};
use rand::Rng;

/// A population member: a board and its fitness for the current generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    state: State,
    fitness: u32,
}

impl Candidate {
    /// Wraps a state that has not been evaluated yet.
    pub fn new(state: State) -> Self {
        Self {
            state,
            fitness: u32::worst(),
        }
    }

    /// The board.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Consumes the candidate, returning its board.
    pub fn into_state(self) -> State {
        self.state
    }
}

impl Individual for Candidate {
    type Fitness = u32;

    fn fitness(&self) -> u32 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: u32) {
        self.fitness = fitness;
    }
}

/// Goal, heuristic and optional fixed start of one run.
///
/// Construction rejects a fixed start outside the goal's parity class, so
/// a `PuzzleProblem` is always searchable.
#[derive(Debug, Clone)]
pub struct PuzzleProblem {
    goal: Goal,
    heuristic: Heuristic,
    initial_state: Option<State>,
}

impl PuzzleProblem {
    /// Builds the problem, checking that the initial state can reach the goal.
    pub fn new(goal: State, heuristic: Heuristic, initial_state: Option<State>) -> Result<Self> {
        if let Some(start) = initial_state {
            if !is_solvable_for(&start, &goal) {
                return Err(SolverError::UnsolvableInitialState { state: start });
            }
        }
        Ok(Self {
            goal: Goal::new(goal),
            heuristic,
            initial_state,
        })
    }

    /// Builds the problem described by `config`.
    pub fn from_config(config: &SolverConfig) -> Result<Self> {
        Self::new(config.goal, config.heuristic, config.initial_state)
    }

    /// The goal and its position index.
    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    /// The active heuristic.
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Scores a board.
    pub fn fitness_of(&self, state: &State) -> u32 {
        self.heuristic.evaluate(&self.goal, state)
    }
}

impl GaProblem for PuzzleProblem {
    type Individual = Candidate;

    fn seed_individuals(&self) -> Vec<Candidate> {
        self.initial_state.into_iter().map(Candidate::new).collect()
    }

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Candidate {
        Candidate::new(random_solvable_state(self.goal.state(), rng))
    }

    fn evaluate(&self, individual: &Candidate) -> u32 {
        self.fitness_of(&individual.state)
    }

    /// One child per pair. Children are not re-checked for solvability, so
    /// the population may drift into the unreachable parity class.
    fn crossover<R: Rng>(&self, parent1: &Candidate, parent2: &Candidate, rng: &mut R) -> Vec<Candidate> {
        let genes = one_point_order_crossover(&parent1.state.tiles()[..], &parent2.state.tiles()[..], rng);
        let mut tiles = [0u8; CELLS];
        tiles.copy_from_slice(&genes);
        vec![Candidate::new(State::from_permutation(tiles))]
    }

    fn mutate<R: Rng>(&self, individual: &mut Candidate, rng: &mut R) {
        swap_mutation(&mut individual.state.tiles_mut()[..], rng);
    }

    fn is_optimal(&self, fitness: u32) -> bool {
        fitness == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::operators::is_permutation;
    use crate::puzzle::solvability::is_solvable;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn state(tiles: [u8; 9]) -> State {
        State::new(tiles).unwrap()
    }

    #[test]
    fn test_unsolvable_start_is_rejected() {
        let start = state([4, 1, 2, 3, 5, 0, 6, 7, 8]);
        let err = PuzzleProblem::new(State::solved(), Heuristic::Manhattan, Some(start)).unwrap_err();
        assert_eq!(err, SolverError::UnsolvableInitialState { state: start });
    }

    #[test]
    fn test_seed_individuals() {
        let start = state([1, 4, 2, 3, 5, 0, 6, 7, 8]);
        let seeded = PuzzleProblem::new(State::solved(), Heuristic::Manhattan, Some(start)).unwrap();
        assert_eq!(seeded.seed_individuals(), vec![Candidate::new(start)]);

        let random = PuzzleProblem::new(State::solved(), Heuristic::Manhattan, None).unwrap();
        assert!(random.seed_individuals().is_empty());
    }

    #[test]
    fn test_evaluate_uses_configured_heuristic() {
        let start = state([1, 4, 2, 3, 5, 0, 6, 7, 8]);
        let manhattan = PuzzleProblem::new(State::solved(), Heuristic::Manhattan, None).unwrap();
        let misplaced = PuzzleProblem::new(State::solved(), Heuristic::Misplaced, None).unwrap();
        assert_eq!(manhattan.evaluate(&Candidate::new(start)), 11);
        assert_eq!(misplaced.evaluate(&Candidate::new(start)), 7);
        assert!(manhattan.is_optimal(0));
        assert!(!manhattan.is_optimal(1));
    }

    #[test]
    fn test_created_individuals_are_solvable() {
        let problem = PuzzleProblem::new(State::solved(), Heuristic::Manhattan, None).unwrap();
        let mut rng = create_rng(5);
        for _ in 0..100 {
            let c = problem.create_individual(&mut rng);
            assert!(is_solvable(c.state()));
            assert_eq!(c.fitness(), u32::MAX);
        }
    }

    #[test]
    fn test_mutation_keeps_permutation() {
        let problem = PuzzleProblem::new(State::solved(), Heuristic::Manhattan, None).unwrap();
        let mut rng = create_rng(11);
        let mut c = Candidate::new(State::solved());
        for _ in 0..50 {
            problem.mutate(&mut c, &mut rng);
            assert!(is_permutation(&c.state().tiles()[..]));
        }
    }

    fn any_state() -> impl Strategy<Value = State> {
        Just((0u8..9).collect::<Vec<u8>>())
            .prop_shuffle()
            .prop_map(|tiles| State::from_slice(&tiles).unwrap())
    }

    proptest! {
        #[test]
        fn prop_crossover_child_is_permutation(a in any_state(), b in any_state(), seed in any::<u64>()) {
            let problem = PuzzleProblem::new(State::solved(), Heuristic::Manhattan, None).unwrap();
            let mut rng = create_rng(seed);
            let children = problem.crossover(&Candidate::new(a), &Candidate::new(b), &mut rng);
            prop_assert_eq!(children.len(), 1);
            prop_assert!(is_permutation(&children[0].state().tiles()[..]));
            prop_assert_eq!(children[0].state().tiles()[0], a.tiles()[0]);
        }
    }
}
