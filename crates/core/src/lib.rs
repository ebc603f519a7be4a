//! Core game logic module - pure and testable
//!
//! This module contains the game rules and state management for the
//! falling-block game. It has **zero dependencies** on terminal I/O or
//! threading; the control loop drives it one command at a time.
//!
//! # Module Structure
//!
//! - [`pieces`]: piece instances and quarter-turn geometry
//! - [`grid`]: settled-cell occupancy with line clearing
//! - [`board`]: active piece, upcoming queue, score and the command interpreter
//! - [`rng`]: uniform random piece generation
//! - [`error`]: invariant violations
//!
//! # Game Rules
//!
//! - **Collision**: a placement is illegal if any cell leaves the grid or overlaps a settled cell
//! - **Rotation**: one quarter turn, with a single one-cell kick towards the board centre
//! - **Locking**: a soft drop that cannot move, or any hard drop, commits the piece
//! - **Scoring**: one point per cleared row, no multipliers
//! - **Game over**: the next piece collides at spawn
//!
//! # Example
//!
//! ```
//! use termtris_core::{ApplyOutcome, Board};
//! use termtris_types::{BoardSize, GameAction};
//!
//! let mut board = Board::with_seed(BoardSize::Medium, 12345);
//!
//! board.apply(GameAction::MoveRight).unwrap();
//! board.apply(GameAction::Rotate).unwrap();
//! let outcome = board.apply(GameAction::HardDrop).unwrap();
//!
//! assert!(matches!(outcome, ApplyOutcome::Locked { .. }));
//! assert_eq!(board.grid().occupied_count(), 4);
//! ```

pub mod board;
pub mod error;
pub mod grid;
pub mod pieces;
pub mod rng;

pub use termtris_types as types;

pub use board::{ApplyOutcome, Board, LockOutcome};
pub use error::InvariantViolation;
pub use grid::Grid;
pub use pieces::{CellPos, Piece, PieceCells};
pub use rng::PieceSource;
