//! Frame: maps a [`Board`] into the text frame shown on screen.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom:
//!
//! ```text
//! ************            border, width + 2
//! Score: 3 | Next: t      status line
//! ************
//! |    #     |            one line per board row
//! |   ...    |
//! ************
//! ```

use std::fmt;

use crate::core::{Board, InvariantViolation};

/// Border line character.
pub const BORDER: char = '*';
/// Left and right wall character.
pub const WALL: char = '|';
/// Occupied cell, settled or active.
pub const FILL: char = '#';
/// Landing projection of the active piece.
pub const GHOST: char = '.';
/// Empty cell.
pub const EMPTY: char = ' ';

/// A rendered frame, one string per screen line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The board rows only, without walls
    pub fn board_rows(&self) -> impl Iterator<Item = &str> {
        let rows = self.lines.len().saturating_sub(4);
        self.lines
            .iter()
            .skip(3)
            .take(rows)
            .map(|line| line.trim_start_matches(WALL).trim_end_matches(WALL))
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Render the full frame for the current board.
///
/// Fails if the active piece overlaps settled cells, which the command
/// interpreter must never allow.
pub fn render_frame(board: &Board) -> Result<Frame, InvariantViolation> {
    board.check_active()?;

    let width = board.width() as usize;
    let height = board.height() as usize;
    let active = board.active().locations();
    let ghost = board.ghost_locations();

    let border: String = std::iter::repeat(BORDER).take(width + 2).collect();
    let mut lines = Vec::with_capacity(height + 4);
    lines.push(border.clone());
    lines.push(format!(
        "Score: {} | Next: {}",
        board.score(),
        board.next_shape().as_str()
    ));
    lines.push(border.clone());

    for y in 0..height as i8 {
        let mut line = String::with_capacity(width + 2);
        line.push(WALL);
        for x in 0..width as i8 {
            let ch = if board.grid().is_occupied(x, y) || active.contains(&(x, y)) {
                FILL
            } else if ghost.contains(&(x, y)) {
                GHOST
            } else {
                EMPTY
            };
            line.push(ch);
        }
        line.push(WALL);
        lines.push(line);
    }

    lines.push(border);
    Ok(Frame { lines })
}
