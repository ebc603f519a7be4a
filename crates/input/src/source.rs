//! Raw key reading.
//!
//! [`KeySource`] is the input primitive the control loop's input producer
//! waits on. [`TerminalKeys`] reads from the real terminal via crossterm.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Something that yields key presses.
pub trait KeySource: Send + 'static {
    /// Wait up to `timeout` for one key press.
    ///
    /// Returns `Ok(None)` if nothing arrived in time.
    fn read_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>>;
}

/// Key presses from the controlling terminal.
///
/// The terminal must already be in raw mode (see the term crate's renderer).
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl TerminalKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for TerminalKeys {
    fn read_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            // Ignore terminal auto-repeat and key-release reports
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}

/// Pre-recorded key presses, handed out one per read.
///
/// Once the script runs out every read waits the full timeout and returns nothing.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    keys: std::collections::VecDeque<KeyEvent>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        match self.keys.pop_front() {
            Some(key) => Ok(Some(key)),
            None => {
                std::thread::sleep(timeout);
                Ok(None)
            }
        }
    }
}
