//! Terminal rendering module.
//!
//! Turns a [`crate::core::Board`] into a plain-text [`Frame`] and flushes
//! frames to the terminal. Rendering is split in two so the frame layout can
//! be unit-tested without a terminal:
//!
//! - [`frame`]: pure board → text conversion
//! - [`renderer`]: crossterm terminal lifecycle and line-diff output

pub mod frame;
pub mod renderer;

pub use termtris_core as core;
pub use termtris_types as types;

pub use frame::{render_frame, Frame, BORDER, EMPTY, FILL, GHOST, WALL};
pub use renderer::{encode_diff_into, encode_full_into, ring_bell, FrameSink, TerminalRenderer};
