//! Building a [`Grid`] from maze text.

use super::Grid;
use std::path::Path;
use thiserror::Error;

/// Longest accepted maze line, in characters.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 255;

/// Reasons maze text cannot become a grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// No rows, or a first row without characters.
    #[error("maze is empty")]
    Empty,

    /// A line exceeds the configured limit. `row` is 0-based.
    #[error("row {row} is {length} characters long (maximum is {max})")]
    LineTooLong { row: usize, length: usize, max: usize },

    /// The maze file could not be read.
    #[error("failed to read maze file '{path}': {message}")]
    Io { path: String, message: String },
}

impl Grid {
    /// Parse line-oriented maze text.
    ///
    /// Each line's trailing `\n` (and `\r\n`) is stripped. Lines longer than
    /// `max_line_length` characters are rejected rather than split.
    pub fn parse(text: &str, max_line_length: usize) -> Result<Self, LoadError> {
        let mut rows = Vec::new();

        for (row, line) in text.lines().enumerate() {
            let cells: Vec<char> = line.chars().collect();
            if cells.len() > max_line_length {
                return Err(LoadError::LineTooLong {
                    row,
                    length: cells.len(),
                    max: max_line_length,
                });
            }
            rows.push(cells);
        }

        Grid::new(rows)
    }
}

/// Read and parse a maze file.
pub fn load_file<P: AsRef<Path>>(path: P, max_line_length: usize) -> Result<Grid, LoadError> {
    let path = path.as_ref();

    let text = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    Grid::parse(&text, max_line_length)
}
