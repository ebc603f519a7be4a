//! Pieces module - tetromino instances and rotation geometry
//!
//! A [`Piece`] is a shape plus a reference-cell position and a rotation. It
//! knows nothing about the board: whether a placement is legal is decided by
//! [`crate::Board`].

use crate::types::{Rotation, Shape, SPAWN_X, SPAWN_Y};

/// Absolute board coordinate of a single cell
pub type CellPos = (i8, i8);

/// The four cells a piece occupies
pub type PieceCells = [CellPos; 4];

/// Rotate an offset by `turns` quarter turns.
///
/// One quarter turn maps `(dx, dy)` to `(-dy, dx)`; two turns negate both axes.
pub fn rotate_offset((dx, dy): CellPos, rotation: Rotation) -> CellPos {
    match rotation {
        Rotation::North => (dx, dy),
        Rotation::East => (-dy, dx),
        Rotation::South => (-dx, -dy),
        Rotation::West => (dy, -dx),
    }
}

/// A tetromino with a position and orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    pub rotation: Rotation,
}

impl Piece {
    /// Create a new piece at spawn position
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            x: SPAWN_X,
            y: SPAWN_Y,
            rotation: Rotation::North,
        }
    }

    /// Create a piece at an explicit position and rotation
    pub fn at(shape: Shape, x: i8, y: i8, rotation: Rotation) -> Self {
        Self {
            shape,
            x,
            y,
            rotation,
        }
    }

    /// Return to spawn coordinates and rotation 0
    pub fn reset(&mut self) {
        self.x = SPAWN_X;
        self.y = SPAWN_Y;
        self.rotation = Rotation::North;
    }

    /// Cells occupied on the board.
    ///
    /// Recomputed from `(shape, x, y, rotation)` on every call. The result may
    /// lie out of bounds; that is the board's concern.
    pub fn locations(&self) -> PieceCells {
        let offsets = self.shape.offsets();
        let mut cells = [(0, 0); 4];
        for (cell, &offset) in cells.iter_mut().zip(offsets.iter()) {
            let (dx, dy) = rotate_offset(offset, self.rotation);
            *cell = (self.x + dx, self.y + dy);
        }
        cells
    }

    /// Copy shifted by `(dx, dy)`.
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy turned one quarter turn.
    pub fn rotated(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }
}
