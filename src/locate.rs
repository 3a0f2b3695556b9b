//! Finding the entrant marker.

use crate::grid::{Cell, Grid, Position};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocateError {
    #[error("no entrant '{}' found in maze", Cell::Entrant.symbol())]
    NotFound,
}

/// Return the first entrant in row-major order.
///
/// Scanning stops at the first match. A second entrant elsewhere in the grid
/// is neither detected nor reported.
pub fn locate_entrant(grid: &Grid) -> Result<Position, LocateError> {
    let entrant = Cell::Entrant.symbol();

    grid.rows()
        .enumerate()
        .find_map(|(row, cells)| {
            cells
                .iter()
                .position(|&symbol| symbol == entrant)
                .map(|column| Position::new(column, row))
        })
        .ok_or(LocateError::NotFound)
}
