//! Terminal input module (engine-facing).
//!
//! Reads raw key presses from the terminal and maps them into
//! [`crate::types::Command`] values for the control loop's queue. Key
//! bindings are fixed.

pub mod map;
pub mod source;

pub use termtris_types as types;

pub use map::{command_for_key, should_quit};
pub use source::{KeySource, ScriptedKeys, TerminalKeys};
