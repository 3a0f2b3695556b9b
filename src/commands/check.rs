//! Implementation of the `mazewalk check` command.

use super::input::maze_path;
use crate::cli::CheckArgs;
use crate::config;
use crate::driver::{self, RunLog};
use crate::error::{MazeError, Result};
use std::io::Write;

/// Execute the `mazewalk check` command.
///
/// # Exit Codes
///
/// - 0: Maze is valid and has an entrant
/// - 1: User error (unreadable maze or config)
/// - 2: Maze is malformed
/// - 3: No entrant
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    check_to(args, &mut std::io::stdout())
}

pub(crate) fn check_to<W: Write>(args: CheckArgs, out: &mut W) -> Result<()> {
    let config = config::resolve(args.config.as_deref())?;
    let path = maze_path(args.maze)?;

    let maze = driver::prepare(&path, &config, &RunLog::disabled())?;

    writeln!(
        out,
        "{}: valid {}x{} maze, entrant at {}",
        path.display(),
        maze.grid.width(),
        maze.grid.height(),
        maze.entrant
    )
    .map_err(|e| MazeError::UserError(format!("failed to write output: {}", e)))
}
