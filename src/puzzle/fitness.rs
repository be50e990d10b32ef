//! Distance-to-goal heuristics.
//!
//! Both heuristics are pure, return `0` exactly for the goal itself, and
//! grow with distance. Lower is better.

use super::state::{cell, State, BLANK, CELLS};

/// Strategy used to score a state against the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Heuristic {
    /// Number of cells (blank included) whose tile differs from the goal. Range 0..=9.
    Misplaced,
    /// Sum of row and column offsets of the numbered tiles. Range 0..=24.
    #[default]
    Manhattan,
}

impl Heuristic {
    /// Scores `state` against `goal`.
    pub fn evaluate(self, goal: &Goal, state: &State) -> u32 {
        match self {
            Heuristic::Misplaced => goal.misplaced(state),
            Heuristic::Manhattan => goal.manhattan(state),
        }
    }
}

/// The target arrangement together with each tile's target cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    state: State,
    /// `positions[tile]` is the `(row, col)` of `tile` in the goal.
    positions: [(usize, usize); CELLS],
}

impl Goal {
    /// Precomputes the position index of `state`.
    pub fn new(state: State) -> Self {
        let mut positions = [(0, 0); CELLS];
        for (i, &tile) in state.tiles().iter().enumerate() {
            positions[tile as usize] = cell(i);
        }
        Self { state, positions }
    }

    /// The goal arrangement.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Target `(row, col)` of a tile.
    pub fn position_of(&self, tile: u8) -> (usize, usize) {
        self.positions[tile as usize]
    }

    /// Misplaced-tiles distance.
    pub fn misplaced(&self, state: &State) -> u32 {
        state
            .tiles()
            .iter()
            .zip(self.state.tiles())
            .filter(|(a, b)| a != b)
            .count() as u32
    }

    /// Manhattan distance, blank excluded.
    pub fn manhattan(&self, state: &State) -> u32 {
        state
            .tiles()
            .iter()
            .enumerate()
            .filter(|(_, &tile)| tile != BLANK)
            .map(|(i, &tile)| {
                let (row, col) = cell(i);
                let (goal_row, goal_col) = self.position_of(tile);
                (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
            })
            .sum()
    }
}

impl Default for Goal {
    fn default() -> Self {
        Self::new(State::solved())
    }
}
