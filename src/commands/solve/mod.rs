//! Implementation of the `mazewalk solve` command.
//!
//! 1. Resolve the config and apply command-line overrides
//! 2. Resolve the maze path (argument or stdin prompt)
//! 3. Load, validate and locate
//! 4. Run one attempt per budget
//! 5. Print the report (text or JSON), optionally write it to `--output`
//! 6. Map an unsolved run to a failure when asked to


use super::input::maze_path;
use crate::cli::SolveArgs;
use crate::config::{self, Config};
use crate::driver::{self, RunLog, SolveReport};
use crate::error::{MazeError, Result};
use crate::fs::atomic_write_file;
use std::io::Write;
use tracing::info;

/// Execute the `mazewalk solve` command.
///
/// # Exit Codes
///
/// - 0: Pipeline completed (whatever the attempt outcomes)
/// - 1: User error (bad args, unreadable maze or config)
/// - 2: Maze is malformed
/// - 3: No entrant
/// - 4: No attempt reached an exit and `fail_if_unsolved` is set
pub fn cmd_solve(args: SolveArgs) -> Result<()> {
    solve_to(args, &mut std::io::stdout()).map(|_| ())
}

/// Run `solve`, writing the report to `out`.
pub(crate) fn solve_to<W: Write>(args: SolveArgs, out: &mut W) -> Result<SolveReport> {
    let config = effective_config(&args)?;
    let path = maze_path(args.maze.clone())?;
    let log = RunLog::new(args.run_log.clone(), path.display().to_string());

    let report = driver::solve(&path, &config, &log)?;

    let rendered = if args.json {
        let mut json = report.to_json()?;
        json.push('\n');
        json
    } else {
        report.render_text(config.print_trace)
    };
    out.write_all(rendered.as_bytes())
        .map_err(|e| MazeError::UserError(format!("failed to write report: {}", e)))?;

    if let Some(output) = &args.output {
        atomic_write_file(output, &report.to_json()?)?;
        info!(path = %output.display(), "report written");
    }

    if config.fail_if_unsolved && !report.solved() {
        return Err(MazeError::Unsolved(format!(
            "no attempt reached an exit in '{}' (budgets: {:?})",
            report.maze, config.budgets
        )));
    }

    Ok(report)
}

/// Config from file, with command-line flags taking precedence.
fn effective_config(args: &SolveArgs) -> Result<Config> {
    let mut config = config::resolve(args.config.as_deref())?;

    if !args.budgets.is_empty() {
        config.budgets = args.budgets.clone();
    }
    if args.backtrack_capacity.is_some() {
        config.backtrack_capacity = args.backtrack_capacity;
    }
    if args.no_trace {
        config.print_trace = false;
    }
    if args.fail_if_unsolved {
        config.fail_if_unsolved = true;
    }

    config.validate()?;
    Ok(config)
}
