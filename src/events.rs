//! Run log for mazewalk.
//!
//! When a run log path is given, every pipeline stage appends one event in
//! NDJSON format (one JSON object per line).
//!
//! # Event Format
//!
//! Each event is a JSON object with the following fields:
//! - `ts`: RFC3339 timestamp
//! - `action`: the stage (load, validate, locate, attempt, finish)
//! - `actor`: the owner string (e.g., `user@HOST`)
//! - `maze`: optional maze path the event belongs to
//! - `details`: freeform object with action-specific details

use crate::error::{MazeError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Maze text read and parsed into a grid
    Load,
    /// Structural validation finished
    Validate,
    /// Entrant located
    Locate,
    /// One traversal attempt finished
    Attempt,
    /// All attempts finished
    Finish,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Load => write!(f, "load"),
            EventAction::Validate => write!(f, "validate"),
            EventAction::Locate => write!(f, "locate"),
            EventAction::Attempt => write!(f, "attempt"),
            EventAction::Finish => write!(f, "finish"),
        }
    }
}

/// An event record for the run log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The stage that produced the event.
    pub action: EventAction,

    /// Who ran mazewalk (e.g., `user@HOST`).
    pub actor: String,

    /// Maze the event belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maze: Option<String>,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event stamped with the current time and actor.
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            maze: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the maze this event belongs to.
    pub fn with_maze(mut self, maze: impl Into<String>) -> Self {
        self.maze = Some(maze.into());
        self
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| MazeError::UserError(format!("failed to serialize event to JSON: {}", e)))
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the run log at `path`.
///
/// The file and its parent directory are created if missing. Each append
/// writes exactly one line and syncs it to disk.
pub fn append_event(path: &Path, event: &Event) -> Result<()> {
    let json_line = event.to_ndjson_line()?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            MazeError::UserError(format!(
                "failed to create run log directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            MazeError::UserError(format!(
                "failed to open run log '{}': {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        MazeError::UserError(format!(
            "failed to write event to '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.sync_all().map_err(|e| {
        MazeError::UserError(format!(
            "failed to sync run log '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}

/// Read all events from a run log. A missing file yields no events.
pub fn read_events(path: &Path) -> Result<Vec<Event>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        MazeError::UserError(format!(
            "failed to read run log '{}': {}",
            path.display(),
            e
        ))
    })?;

    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|e| {
                MazeError::UserError(format!(
                    "failed to parse event on line {} of '{}': {}",
                    i + 1,
                    path.display(),
                    e
                ))
            })
        })
        .collect()
}
