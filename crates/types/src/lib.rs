//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, the control loop).
//!
//! # Board Presets
//!
//! | Preset | Width | Height |
//! |--------|-------|--------|
//! | `Big` (default) | 20 | 20 |
//! | `Medium` | 10 | 10 |
//! | `Small` | 8 | 8 |
//!
//! # Coordinates
//!
//! `(x, y)` with x growing to the right and y growing downwards. Every piece
//! spawns with its reference cell at [`SPAWN_X`], [`SPAWN_Y`].
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 800 | Initial gravity interval |
//! | `POLL_MS` | 10 | Consumer polling interval |
//! | `INPUT_POLL_MS` | 1 | Input read timeout per producer iteration |
//! | `SPEEDUP_FACTOR` | 0.95 | Gravity interval multiplier per scoring command |
//!
//! # Examples
//!
//! ```
//! use termtris_types::{BoardSize, Command, GameAction, Rotation, Shape};
//!
//! assert_eq!(Shape::T.as_str(), "t");
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Command::from(GameAction::HardDrop), Command::Action(GameAction::HardDrop));
//! assert_eq!(BoardSize::default().dimensions(), (20, 20));
//! ```

/// Spawn column of a piece's reference cell.
pub const SPAWN_X: i8 = 5;

/// Spawn row of a piece's reference cell.
pub const SPAWN_Y: i8 = 1;

/// Number of pieces queued up when a board is created.
pub const INITIAL_QUEUE_LEN: usize = 6;

/// Initial gravity interval in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 800;

/// Interval at which the control loop polls the command queue.
pub const POLL_MS: u64 = 10;

/// How long the input producer waits on one key read before checking for shutdown.
pub const INPUT_POLL_MS: u64 = 1;

/// Gravity interval multiplier applied after every command that scored.
pub const SPEEDUP_FACTOR: f64 = 0.95;

/// The seven tetromino kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    O,
    T,
    I,
    S,
    Z,
    J,
    L,
}

impl Shape {
    /// Every shape, in catalog order.
    pub const ALL: [Shape; 7] = [
        Shape::O,
        Shape::T,
        Shape::I,
        Shape::S,
        Shape::Z,
        Shape::J,
        Shape::L,
    ];

    /// Lowercase name, as shown in the status line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::O => "o",
            Shape::T => "t",
            Shape::I => "i",
            Shape::S => "s",
            Shape::Z => "z",
            Shape::J => "j",
            Shape::L => "l",
        }
    }

    /// Cell offsets from the reference cell in the unrotated orientation.
    pub fn offsets(&self) -> &'static [(i8, i8); 4] {
        match self {
            Shape::O => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            Shape::T => &[(-1, 0), (0, 0), (1, 0), (0, 1)],
            Shape::I => &[(0, -1), (0, 0), (0, 1), (0, 2)],
            Shape::S => &[(-1, 1), (0, 1), (0, 0), (1, 0)],
            Shape::Z => &[(-1, 0), (0, 0), (0, 1), (1, 1)],
            Shape::J => &[(-1, 0), (-1, 1), (0, 1), (1, 1)],
            Shape::L => &[(-1, 1), (0, 1), (1, 0), (1, 1)],
        }
    }
}

/// Quarter turns applied to a piece
///
/// The cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate one quarter turn
    ///
    /// # Examples
    ///
    /// ```
    /// use termtris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }
}

/// Commands understood by the board's command interpreter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it cannot move
    SoftDrop,
    /// Drop piece to the lowest legal row and lock it
    HardDrop,
    /// Rotate one quarter turn, with a single wall kick
    Rotate,
    /// Put the active piece back at the head of the queue and take the next one
    Stash,
    /// Discard the active piece without locking it
    DebugAdvance,
}

impl GameAction {
    pub const ALL: [GameAction; 7] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Rotate,
        GameAction::Stash,
        GameAction::DebugAdvance,
    ];
}

/// An entry in the control loop's command queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Apply an action to the board.
    Action(GameAction),
    /// Stop the game cleanly.
    Exit,
}

impl From<GameAction> for Command {
    fn from(action: GameAction) -> Self {
        Command::Action(action)
    }
}

/// Board dimension presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardSize {
    /// 20x20
    #[default]
    Big,
    /// 10x10
    Medium,
    /// 8x8
    Small,
}

impl BoardSize {
    /// `(width, height)` in cells.
    pub fn dimensions(&self) -> (u8, u8) {
        match self {
            BoardSize::Big => (20, 20),
            BoardSize::Medium => (10, 10),
            BoardSize::Small => (8, 8),
        }
    }
}
