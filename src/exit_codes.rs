//! Exit code constants for the mazewalk CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable files, bad config)
//! - 2: Validation failure (maze text is not a structurally valid maze)
//! - 3: Entrant not found
//! - 4: Unsolved (only when `fail_if_unsolved` is enabled)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the maze could not be loaded or broke a structural rule.
pub const VALIDATION_FAILURE: i32 = 2;

/// The maze has no entrant marker.
pub const ENTRANT_NOT_FOUND: i32 = 3;

/// No traversal attempt reached an exit and the run asked for that to fail.
pub const UNSOLVED: i32 = 4;
