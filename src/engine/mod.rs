//! Traversal engine.
//!
//! A [`Walker`] moves an agent through its own copy of a grid using a
//! priority-biased depth-first search:
//!
//! - an adjacent exit is always taken first;
//! - otherwise the first open neighbour in left, up, right, down order;
//! - otherwise the last forward direction is popped from the backtrack stack
//!   and reversed.
//!
//! Cells the agent leaves are marked visited. Visited cells only stop the
//! agent from *choosing* them; a retreat may still step back onto them.
//! The search is greedy and makes no promise about path length.
//!
//! # Termination
//!
//! Every tick either moves the agent (spending one move), pops the backtrack
//! stack, or ends the attempt. Forward directions are only chosen among
//! enterable neighbours, so a tick can never leave all three unchanged.

mod backtrack;
mod direction;
mod walker;


pub use backtrack::BacktrackStack;
pub use direction::Direction;
pub use walker::Walker;

use crate::grid::{Grid, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal result of one traversal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The agent stepped onto an exit.
    Reached,
    /// The move budget ran out first.
    Exhausted,
    /// No move was possible.
    Stuck,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Reached => write!(f, "reached"),
            Outcome::Exhausted => write!(f, "exhausted"),
            Outcome::Stuck => write!(f, "stuck"),
        }
    }
}

/// Why an attempt ended [`Outcome::Stuck`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StuckCause {
    /// A dead end with nothing left to backtrack through.
    BacktrackEmpty,
    /// A forward step was needed but the bounded backtrack stack was full.
    BacktrackFull,
}

impl fmt::Display for StuckCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StuckCause::BacktrackEmpty => write!(f, "backtrack stack empty"),
            StuckCause::BacktrackFull => write!(f, "backtrack stack full"),
        }
    }
}

/// Whether a walker can still move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    Running,
    Finished(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Forward,
    Retreat,
}

/// One successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub kind: StepKind,
    pub direction: Direction,
    pub to: Position,
}

/// Everything a finished attempt leaves behind.
#[derive(Debug, Clone)]
pub struct Attempt {
    pub outcome: Outcome,
    pub stuck_cause: Option<StuckCause>,
    pub steps: Vec<Step>,
    pub remaining_moves: usize,
    pub position: Position,
    /// The working grid with the agent's trace drawn on it.
    pub grid: Grid,
}

impl Attempt {
    pub fn steps_taken(&self) -> usize {
        self.steps.len()
    }

    pub fn into_parts(self) -> (Outcome, Grid) {
        (self.outcome, self.grid)
    }
}

/// Run one attempt on a private copy of `grid` with an unbounded backtrack
/// stack. `grid` itself is never modified.
pub fn run(grid: &Grid, start: Position, budget: usize) -> Attempt {
    run_with_capacity(grid, start, budget, None)
}

/// Like [`run`], with an optional bound on the backtrack stack.
pub fn run_with_capacity(
    grid: &Grid,
    start: Position,
    budget: usize,
    backtrack_capacity: Option<usize>,
) -> Attempt {
    Walker::new(grid.clone(), start, budget, backtrack_capacity).run_to_end()
}
