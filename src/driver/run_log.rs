//! Optional per-run event recorder.

use crate::error::Result;
use crate::events::{Event, EventAction, append_event};
use serde_json::Value;
use std::path::PathBuf;

/// Appends pipeline events for one maze to a run log, if one is configured.
#[derive(Debug, Clone, Default)]
pub struct RunLog {
    path: Option<PathBuf>,
    maze: Option<String>,
}

impl RunLog {
    /// A recorder that writes nothing.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn new(path: Option<PathBuf>, maze: impl Into<String>) -> Self {
        Self {
            path,
            maze: Some(maze.into()),
        }
    }

    pub fn record(&self, action: EventAction, details: Value) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let mut event = Event::new(action).with_details(details);
        if let Some(maze) = &self.maze {
            event = event.with_maze(maze.clone());
        }
        append_event(path, &event)
    }
}
