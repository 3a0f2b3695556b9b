//! CLI argument parsing for mazewalk.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mazewalk: validate a text maze and walk it toward an exit.
///
/// Mazes are plain text: `#` wall, space open, `E` exit, `^` entrant.
/// The walker prefers adjacent exits, then open cells in left, up, right,
/// down order, and backtracks out of dead ends.
#[derive(Parser, Debug)]
#[command(name = "mazewalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for mazewalk.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a maze and run traversal attempts with escalating budgets.
    ///
    /// Each budget gets a fresh copy of the maze and starts from the entrant.
    Solve(SolveArgs),

    /// Validate a maze and report its entrant without walking it.
    Check(CheckArgs),
}

/// Arguments for the `solve` command.
#[derive(Parser, Debug, Default)]
pub struct SolveArgs {
    /// Maze text file. Prompted for on stdin when omitted.
    pub maze: Option<PathBuf>,

    /// Move budget to try; repeat for several attempts. Overrides the config.
    #[arg(short, long = "budget", value_name = "MOVES")]
    pub budgets: Vec<usize>,

    /// Config file (default: ./mazewalk.yaml when present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Bound the backtrack stack; a walk that needs more gets stuck.
    #[arg(long, value_name = "ENTRIES")]
    pub backtrack_capacity: Option<usize>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also write the JSON report to this file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Append NDJSON run events to this file.
    #[arg(long, value_name = "PATH")]
    pub run_log: Option<PathBuf>,

    /// Do not print grid traces.
    #[arg(long)]
    pub no_trace: bool,

    /// Exit with a failure code when no attempt reaches an exit.
    #[arg(long)]
    pub fail_if_unsolved: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug, Default)]
pub struct CheckArgs {
    /// Maze text file. Prompted for on stdin when omitted.
    pub maze: Option<PathBuf>,

    /// Config file (default: ./mazewalk.yaml when present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
