//! TerminalRenderer: flushes a frame to a real terminal.
//!
//! This module intentionally keeps the drawing API small: a full redraw on
//! the first frame, then only the lines that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::frame::Frame;

/// Display side of the game: receives every rendered frame.
pub trait FrameSink {
    fn present(&mut self, frame: &Frame) -> Result<()>;
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Frame>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a frame, diffing against the previous one.
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.buf.clear();
        match &self.last {
            Some(prev) if prev == frame => return Ok(()),
            Some(prev) if prev.lines().len() == frame.lines().len() => {
                encode_diff_into(prev, frame, &mut self.buf)?;
            }
            _ => encode_full_into(frame, &mut self.buf)?,
        }
        self.flush_buf()?;
        self.last = Some(frame.clone());
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSink for TerminalRenderer {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        self.draw(frame)
    }
}

/// Ring the terminal bell.
pub fn ring_bell() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(b"\x07")?;
    stdout.flush()?;
    Ok(())
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(frame: &Frame, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for (y, line) in frame.lines().iter().enumerate() {
        if y > 0 {
            out.queue(Print("\r\n"))?;
        }
        out.queue(Print(line))?;
    }
    Ok(())
}

/// Encode a redraw of the changed lines into `out`.
///
/// Both frames must have the same number of lines.
pub fn encode_diff_into(prev: &Frame, next: &Frame, out: &mut Vec<u8>) -> Result<()> {
    for y in changed_lines(prev, next) {
        out.queue(cursor::MoveTo(0, y as u16))?;
        out.queue(Print(&next.lines()[y]))?;
        out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
    }
    Ok(())
}

fn changed_lines<'a>(prev: &'a Frame, next: &'a Frame) -> impl Iterator<Item = usize> + 'a {
    prev.lines()
        .iter()
        .zip(next.lines())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(y, _)| y)
}
