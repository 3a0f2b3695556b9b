//! Structural validation of a maze grid.
//!
//! A maze is valid when:
//! - every row is as long as the first row;
//! - every row starts and ends with a wall or an exit;
//! - it only contains walls, open cells, exits and entrants;
//! - it has at least one entrant and at least one exit;
//! - its first and last rows contain only walls, entrants and exits.
//!
//! The rules are checked in that order and the first violation is reported.

#[cfg(test)]
mod tests;

use crate::grid::{Cell, Grid};
use thiserror::Error;

/// The first structural rule a grid breaks. Rows and columns are 0-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("row {row} has length {found}, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid border cell {found:?} at column {column}, row {row}")]
    InvalidBorderCell {
        row: usize,
        column: usize,
        found: char,
    },

    #[error("invalid character {found:?} at column {column}, row {row}")]
    InvalidCharacter {
        row: usize,
        column: usize,
        found: char,
    },

    #[error("maze has no {}", missing_markers(.entrant_found, .exit_found))]
    MissingEntrantOrExit {
        entrant_found: bool,
        exit_found: bool,
    },
}

fn missing_markers(entrant_found: &bool, exit_found: &bool) -> &'static str {
    match (*entrant_found, *exit_found) {
        (false, false) => "entrant and no exit",
        (false, true) => "entrant",
        _ => "exit",
    }
}

/// Check that `grid` is a well-formed maze. Read-only.
pub fn validate(grid: &Grid) -> Result<(), ValidationError> {
    let row_len = grid.width();

    for (row, cells) in grid.rows().enumerate().skip(1) {
        if cells.len() != row_len {
            return Err(ValidationError::RowLengthMismatch {
                row,
                expected: row_len,
                found: cells.len(),
            });
        }
    }

    let mut entrant_found = false;
    let mut exit_found = false;

    for (row, cells) in grid.rows().enumerate() {
        for column in [0, row_len - 1] {
            let found = cells[column];
            if !matches!(Cell::from_symbol(found), Some(Cell::Wall | Cell::Exit)) {
                return Err(ValidationError::InvalidBorderCell { row, column, found });
            }
        }

        for (column, &found) in cells.iter().enumerate() {
            match Cell::from_symbol(found) {
                Some(Cell::Wall | Cell::Open) => {}
                Some(Cell::Entrant) => entrant_found = true,
                Some(Cell::Exit) => exit_found = true,
                Some(Cell::Visited) | None => {
                    return Err(ValidationError::InvalidCharacter { row, column, found });
                }
            }
        }
    }

    if !entrant_found || !exit_found {
        return Err(ValidationError::MissingEntrantOrExit {
            entrant_found,
            exit_found,
        });
    }

    let rows: Vec<&[char]> = grid.rows().collect();
    let last_row = rows.len() - 1;
    for column in 0..row_len {
        for row in [0, last_row] {
            let found = rows[row][column];
            if !matches!(
                Cell::from_symbol(found),
                Some(Cell::Wall | Cell::Entrant | Cell::Exit)
            ) {
                return Err(ValidationError::InvalidBorderCell { row, column, found });
            }
        }
    }

    Ok(())
}
