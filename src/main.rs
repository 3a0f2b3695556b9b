//! Mazewalk: validate text mazes and walk them with a backtracking explorer.
//!
//! This is the main entry point for the `mazewalk` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod fs;
pub mod grid;
pub mod locate;
mod logging;
pub mod validate;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
