//! Error types for the mazewalk CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::grid::LoadError;
use crate::locate::LocateError;
use crate::validate::ValidationError;
use thiserror::Error;

/// Main error type for mazewalk operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum MazeError {
    /// User provided invalid arguments or input could not be read.
    #[error("{0}")]
    UserError(String),

    /// Config file missing, malformed, or holding invalid values.
    #[error("{0}")]
    ConfigError(String),

    /// Maze text could not be turned into a grid.
    #[error("failed to load maze: {0}")]
    Load(#[from] LoadError),

    /// The grid is not a structurally valid maze.
    #[error("invalid maze: {0}")]
    Validation(#[from] ValidationError),

    /// The maze has no entrant to start from.
    #[error("{0}")]
    Locate(#[from] LocateError),

    /// No attempt reached an exit and the run was asked to fail in that case.
    #[error("{0}")]
    Unsolved(String),
}

impl MazeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MazeError::UserError(_) => exit_codes::USER_ERROR,
            MazeError::ConfigError(_) => exit_codes::USER_ERROR,
            MazeError::Load(LoadError::Io { .. }) => exit_codes::USER_ERROR,
            MazeError::Load(_) => exit_codes::VALIDATION_FAILURE,
            MazeError::Validation(_) => exit_codes::VALIDATION_FAILURE,
            MazeError::Locate(_) => exit_codes::ENTRANT_NOT_FOUND,
            MazeError::Unsolved(_) => exit_codes::UNSOLVED,
        }
    }
}

/// Result type alias for mazewalk operations.
pub type Result<T> = std::result::Result<T, MazeError>;
