//! Stack of forward directions used to reverse out of dead ends.

use super::Direction;

/// Ordered record of the forward directions taken in one attempt.
///
/// Grows on demand. With a capacity set, [`BacktrackStack::push`] refuses
/// to grow past it instead of overwriting anything.
#[derive(Debug, Clone, Default)]
pub struct BacktrackStack {
    directions: Vec<Direction>,
    capacity: Option<usize>,
}

impl BacktrackStack {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            directions: Vec::new(),
            capacity,
        }
    }

    /// Push a direction. Returns `false`, leaving the stack unchanged, when
    /// the stack is full.
    #[must_use]
    pub fn push(&mut self, direction: Direction) -> bool {
        if self.is_full() {
            return false;
        }
        self.directions.push(direction);
        true
    }

    pub fn pop(&mut self) -> Option<Direction> {
        self.directions.pop()
    }

    pub fn len(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.capacity
            .is_some_and(|capacity| self.directions.len() >= capacity)
    }
}
