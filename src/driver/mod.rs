//! Run driver.
//!
//! Takes a maze from text to report:
//!
//! 1. Load the maze file into a grid
//! 2. Validate the grid
//! 3. Locate the entrant
//! 4. Run one traversal attempt per move budget, each on a fresh copy of the
//!    grid and each starting from the entrant
//!
//! Stages 1-3 abort the run on failure. Attempt outcomes are results, not
//! errors; whether an unsolved run fails is the caller's decision.

mod report;
mod run_log;


pub use report::{AttemptReport, SolveReport};
pub use run_log::RunLog;

use crate::config::Config;
use crate::engine::{self, Outcome};
use crate::error::Result;
use crate::events::EventAction;
use crate::grid::{self, Grid, Position};
use crate::locate::locate_entrant;
use crate::validate::validate;
use serde_json::json;
use std::path::Path;
use tracing::{debug, info, info_span};

/// A validated maze ready for traversal.
#[derive(Debug, Clone)]
pub struct PreparedMaze {
    pub grid: Grid,
    pub entrant: Position,
}

/// Load, validate and locate. Each stage is recorded in `log`.
pub fn prepare(path: &Path, config: &Config, log: &RunLog) -> Result<PreparedMaze> {
    let grid = match grid::load_file(path, config.max_line_length) {
        Ok(grid) => grid,
        Err(e) => {
            log.record(EventAction::Load, json!({"ok": false, "error": e.to_string()}))?;
            return Err(e.into());
        }
    };
    info!(rows = grid.height(), columns = grid.width(), "maze loaded");
    log.record(
        EventAction::Load,
        json!({"ok": true, "rows": grid.height(), "columns": grid.width()}),
    )?;

    prepare_grid(grid, log)
}

/// Validate and locate an already loaded grid.
pub fn prepare_grid(grid: Grid, log: &RunLog) -> Result<PreparedMaze> {
    if let Err(e) = validate(&grid) {
        log.record(EventAction::Validate, json!({"ok": false, "error": e.to_string()}))?;
        return Err(e.into());
    }
    info!("maze is valid");
    log.record(EventAction::Validate, json!({"ok": true}))?;

    let entrant = match locate_entrant(&grid) {
        Ok(entrant) => entrant,
        Err(e) => {
            log.record(EventAction::Locate, json!({"ok": false, "error": e.to_string()}))?;
            return Err(e.into());
        }
    };
    info!(%entrant, "entrant located");
    log.record(
        EventAction::Locate,
        json!({"ok": true, "column": entrant.column, "row": entrant.row}),
    )?;

    Ok(PreparedMaze { grid, entrant })
}

/// Run one independent attempt per budget, in order.
///
/// Every attempt clones `grid` and starts at `start`; nothing carries over
/// from one attempt to the next.
pub fn run_budgets(
    grid: &Grid,
    start: Position,
    budgets: &[usize],
    backtrack_capacity: Option<usize>,
) -> Vec<AttemptReport> {
    budgets
        .iter()
        .map(|&budget| {
            let _span = info_span!("attempt", budget).entered();
            let attempt = match backtrack_capacity {
                None => engine::run(grid, start, budget),
                Some(_) => engine::run_with_capacity(grid, start, budget, backtrack_capacity),
            };
            debug!(
                outcome = %attempt.outcome,
                steps = attempt.steps_taken(),
                "attempt finished"
            );
            AttemptReport::new(budget, attempt)
        })
        .collect()
}

/// Run the whole pipeline for one maze file.
pub fn solve(path: &Path, config: &Config, log: &RunLog) -> Result<SolveReport> {
    let _span = info_span!("solve", maze = %path.display()).entered();

    let maze = prepare(path, config, log)?;
    let attempts = run_budgets(
        &maze.grid,
        maze.entrant,
        &config.budgets,
        config.backtrack_capacity,
    );

    for attempt in &attempts {
        log.record(
            EventAction::Attempt,
            json!({
                "budget": attempt.budget,
                "outcome": attempt.outcome,
                "steps": attempt.steps_taken,
            }),
        )?;
    }

    let report = SolveReport {
        maze: path.display().to_string(),
        entrant: maze.entrant,
        attempts,
    };
    log.record(
        EventAction::Finish,
        json!({"solved": report.solved(), "attempts": report.attempts.len()}),
    )?;
    info!(solved = report.solved(), "run finished");

    Ok(report)
}

/// Whether any attempt reached an exit.
pub fn any_reached(attempts: &[AttemptReport]) -> bool {
    attempts
        .iter()
        .any(|attempt| attempt.outcome == Outcome::Reached)
}
