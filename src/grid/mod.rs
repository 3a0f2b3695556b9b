//! In-memory maze grid.
//!
//! A [`Grid`] is an ordered sequence of character rows exactly as read from
//! the maze text. Rows may differ in length until the grid has passed
//! [`crate::validate::validate`]; every accessor is bounds-checked so an
//! unvalidated grid never panics.

mod load;

#[cfg(test)]
mod tests;

pub use load::{DEFAULT_MAX_LINE_LENGTH, LoadError, load_file};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of cell a maze can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// `#`: blocks movement.
    Wall,
    /// ` `: free to enter.
    Open,
    /// `E`: a goal cell.
    Exit,
    /// `^`: the start marker, and the agent's current cell during traversal.
    Entrant,
    /// `.`: written behind the agent. Never valid in input.
    Visited,
}

impl Cell {
    /// The character used for this cell in maze text.
    pub const fn symbol(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open => ' ',
            Cell::Exit => 'E',
            Cell::Entrant => '^',
            Cell::Visited => '.',
        }
    }

    /// Map a maze text character to a cell, if it is one.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '#' => Some(Cell::Wall),
            ' ' => Some(Cell::Open),
            'E' => Some(Cell::Exit),
            '^' => Some(Cell::Entrant),
            '.' => Some(Cell::Visited),
            _ => None,
        }
    }

    /// Whether the agent may step onto this cell.
    pub fn is_enterable(self) -> bool {
        matches!(self, Cell::Open | Cell::Visited | Cell::Exit)
    }
}

/// A `(column, row)` coordinate into a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl Position {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Shift by a signed delta. Returns `None` when either component would go
    /// below zero; the upper bound is the grid's business.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        Some(Self {
            column: self.column.checked_add_signed(dx)?,
            row: self.row.checked_add_signed(dy)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column {}, row {}", self.column, self.row)
    }
}

/// A maze as a matrix of characters.
///
/// Construction guarantees at least one row and a non-empty first row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Build a grid from character rows.
    ///
    /// Fails with [`LoadError::Empty`] when there are no rows or the first
    /// row has no characters.
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self, LoadError> {
        match rows.first() {
            Some(first) if !first.is_empty() => Ok(Self { rows }),
            _ => Err(LoadError::Empty),
        }
    }

    /// Build a grid from string rows, one string per row.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, LoadError> {
        Self::new(
            rows.iter()
                .map(|row| row.as_ref().chars().collect())
                .collect(),
        )
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the first row. After validation every row has this length.
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// A row's characters, if the row exists.
    pub fn row(&self, index: usize) -> Option<&[char]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Iterate the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// The raw character at `pos`, if in bounds.
    pub fn symbol(&self, pos: Position) -> Option<char> {
        self.rows.get(pos.row)?.get(pos.column).copied()
    }

    /// The cell at `pos`. `None` when out of bounds or not a maze character.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.symbol(pos).and_then(Cell::from_symbol)
    }

    /// Whether `pos` lies inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        self.symbol(pos).is_some()
    }

    /// Overwrite the cell at `pos`. Out-of-bounds writes are ignored and
    /// reported as `false`.
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match self
            .rows
            .get_mut(pos.row)
            .and_then(|row| row.get_mut(pos.column))
        {
            Some(slot) => {
                *slot = cell.symbol();
                true
            }
            None => false,
        }
    }

    /// Rows rendered as strings, in order.
    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.iter().collect()).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for symbol in row {
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}
