//! Command implementations for mazewalk.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;
mod input;
mod solve;

use crate::cli::Command;
use crate::error::Result;

pub use check::cmd_check;
pub use solve::cmd_solve;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Solve(args) => cmd_solve(args),
        Command::Check(args) => cmd_check(args),
    }
}
