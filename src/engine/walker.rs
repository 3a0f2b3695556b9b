//! The per-attempt traversal state machine.

use super::{Attempt, BacktrackStack, Direction, Outcome, Step, StepKind, StuckCause, WalkState};
use crate::grid::{Cell, Grid, Position};
use tracing::trace;

/// One agent walking one working copy of a maze.
#[derive(Debug)]
pub struct Walker {
    grid: Grid,
    position: Position,
    remaining_moves: usize,
    backtrack: BacktrackStack,
    steps: Vec<Step>,
    state: WalkState,
    stuck_cause: Option<StuckCause>,
}

impl Walker {
    /// Take ownership of a working grid and place the agent on `start`.
    ///
    /// The grid is not touched until the first move.
    pub fn new(
        grid: Grid,
        start: Position,
        budget: usize,
        backtrack_capacity: Option<usize>,
    ) -> Self {
        Self {
            grid,
            position: start,
            remaining_moves: budget,
            backtrack: BacktrackStack::new(backtrack_capacity),
            steps: Vec::new(),
            state: WalkState::Running,
            stuck_cause: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn remaining_moves(&self) -> usize {
        self.remaining_moves
    }

    pub fn state(&self) -> WalkState {
        self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn backtrack_depth(&self) -> usize {
        self.backtrack.len()
    }

    /// The direction the next forward step would take, or `None` when the
    /// agent cannot move forward and has to retreat.
    pub fn choose_direction(&self) -> Option<Direction> {
        self.choose().map(|(direction, _)| direction)
    }

    /// Exits beat open cells; ties go to the first of left, up, right, down.
    fn choose(&self) -> Option<(Direction, Position)> {
        [Cell::Exit, Cell::Open].into_iter().find_map(|wanted| {
            Direction::PRIORITY.into_iter().find_map(|direction| {
                self.neighbor(direction)
                    .filter(|&pos| self.grid.cell(pos) == Some(wanted))
                    .map(|pos| (direction, pos))
            })
        })
    }

    fn neighbor(&self, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.delta();
        self.position
            .offset(dx, dy)
            .filter(|&pos| self.grid.contains(pos))
    }

    /// Advance by one step. Once finished, further ticks change nothing.
    pub fn tick(&mut self) -> WalkState {
        if self.state != WalkState::Running {
            return self.state;
        }

        if self.remaining_moves == 0 {
            return self.finish(Outcome::Exhausted, None);
        }

        let (kind, direction, target) = match self.choose() {
            Some((direction, target)) => {
                if self.backtrack.is_full() {
                    return self.finish(Outcome::Stuck, Some(StuckCause::BacktrackFull));
                }
                (StepKind::Forward, direction, Some(target))
            }
            None => match self.backtrack.pop() {
                Some(last) => {
                    let back = last.opposite();
                    (StepKind::Retreat, back, self.neighbor(back))
                }
                None => return self.finish(Outcome::Stuck, Some(StuckCause::BacktrackEmpty)),
            },
        };

        self.grid.set(self.position, Cell::Visited);

        let Some(target) = target.filter(|&pos| self.grid.cell(pos).is_some_and(Cell::is_enterable))
        else {
            // Unreachable through normal ticks: a retreat returns to a visited
            // cell. Guarded anyway; the pop already happened, so the loop advances.
            trace!(%direction, position = %self.position, "move refused");
            return self.state;
        };

        let entered = self.grid.cell(target);
        self.grid.set(target, Cell::Entrant);
        self.position = target;
        self.remaining_moves -= 1;

        if kind == StepKind::Forward {
            let pushed = self.backtrack.push(direction);
            debug_assert!(pushed, "capacity was checked before moving");
        }
        self.steps.push(Step {
            kind,
            direction,
            to: target,
        });
        trace!(
            ?kind,
            %direction,
            position = %target,
            remaining = self.remaining_moves,
            "moved"
        );

        if entered == Some(Cell::Exit) {
            return self.finish(Outcome::Reached, None);
        }
        if self.remaining_moves == 0 {
            return self.finish(Outcome::Exhausted, None);
        }

        WalkState::Running
    }

    fn finish(&mut self, outcome: Outcome, cause: Option<StuckCause>) -> WalkState {
        self.state = WalkState::Finished(outcome);
        self.stuck_cause = cause;
        self.state
    }

    /// Tick until a terminal state and hand back the result.
    pub fn run_to_end(mut self) -> Attempt {
        let outcome = loop {
            if let WalkState::Finished(outcome) = self.tick() {
                break outcome;
            }
        };

        Attempt {
            outcome,
            stuck_cause: self.stuck_cause,
            steps: self.steps,
            remaining_moves: self.remaining_moves,
            position: self.position,
            grid: self.grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refused_retreat_still_shrinks_the_stack() {
        let maze = Grid::from_rows(&["#####", "#^ #E", "#####"]).unwrap();
        let mut walker = Walker::new(maze, Position::new(1, 1), 10, None);

        assert_eq!(walker.tick(), WalkState::Running);
        assert_eq!(walker.position(), Position::new(2, 1));

        // Wall off the cell the retreat would return to.
        walker.grid.set(Position::new(1, 1), Cell::Wall);

        assert_eq!(walker.tick(), WalkState::Running);
        assert_eq!(walker.position(), Position::new(2, 1));
        assert_eq!(walker.remaining_moves(), 9);
        assert_eq!(walker.backtrack_depth(), 0);
        assert_eq!(walker.steps.len(), 1);

        assert_eq!(walker.tick(), WalkState::Finished(Outcome::Stuck));
        assert_eq!(walker.stuck_cause, Some(StuckCause::BacktrackEmpty));
    }
}
