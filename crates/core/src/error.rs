//! Errors raised when the board's own bookkeeping is broken.

use std::fmt;

use crate::pieces::PieceCells;

/// A state the command interpreter should never produce.
///
/// Routine illegal moves are reverted silently; these indicate a bug and are fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The piece being locked already overlaps settled cells or the walls.
    LockIntoOccupied { cells: PieceCells },
    /// The active piece overlaps settled cells or the walls while drawing.
    ActiveOverlap { cells: PieceCells },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::LockIntoOccupied { cells } => {
                write!(f, "collision while locking piece at {:?}", cells)
            }
            InvariantViolation::ActiveOverlap { cells } => {
                write!(f, "active piece collides while drawing at {:?}", cells)
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}
