//! Attempt and run reports.

use crate::engine::{Attempt, Outcome, Step, StuckCause};
use crate::error::{MazeError, Result};
use crate::grid::Position;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// The result of one traversal attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptReport {
    pub budget: usize,
    pub outcome: Outcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stuck_cause: Option<StuckCause>,
    pub steps_taken: usize,
    pub remaining_moves: usize,
    pub final_position: Position,
    pub steps: Vec<Step>,
    /// The working grid after the attempt, one string per row.
    pub trace: Vec<String>,
}

impl AttemptReport {
    pub fn new(budget: usize, attempt: Attempt) -> Self {
        Self {
            budget,
            outcome: attempt.outcome,
            stuck_cause: attempt.stuck_cause,
            steps_taken: attempt.steps_taken(),
            remaining_moves: attempt.remaining_moves,
            final_position: attempt.position,
            trace: attempt.grid.lines(),
            steps: attempt.steps,
        }
    }

    /// One-line summary, e.g. `reached after 3 steps`.
    pub fn summary(&self) -> String {
        let steps = match self.steps_taken {
            1 => "1 step".to_string(),
            n => format!("{} steps", n),
        };
        match self.stuck_cause {
            Some(cause) => format!("{} after {} ({})", self.outcome, steps, cause),
            None => format!("{} after {}", self.outcome, steps),
        }
    }
}

/// Everything a solve run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    pub maze: String,
    pub entrant: Position,
    pub attempts: Vec<AttemptReport>,
}

impl SolveReport {
    /// Whether any attempt reached an exit.
    pub fn solved(&self) -> bool {
        super::any_reached(&self.attempts)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MazeError::UserError(format!("failed to serialize report: {}", e)))
    }

    /// Human-readable report. Grid traces are included when `print_trace` is set.
    pub fn render_text(&self, print_trace: bool) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Maze: {}", self.maze);
        let _ = writeln!(out, "Entrant: {}", self.entrant);

        for (i, attempt) in self.attempts.iter().enumerate() {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "Attempt {} (budget {}): {}",
                i + 1,
                attempt.budget,
                attempt.summary()
            );
            if print_trace {
                for line in &attempt.trace {
                    let _ = writeln!(out, "{}", line);
                }
            }
        }

        let _ = writeln!(out);
        if self.solved() {
            let _ = writeln!(out, "Exit reached.");
        } else {
            let _ = writeln!(out, "No attempt reached an exit.");
        }

        out
    }
}
