//! The consumer side of the control loop.
//!
//! [`ControlLoop`] owns the [`Board`] and the [`Controls`]. Each poll cycle it
//! redraws the frame and applies at most one queued command; it is the only
//! place the board is mutated.

use std::time::Duration;

use anyhow::{bail, Result};
use log::{debug, info, warn};
use tokio::sync::mpsc::error::TryRecvError;

use crate::config::GameConfig;
use crate::context::Controls;
use crate::core::{ApplyOutcome, Board, InvariantViolation};
use crate::producers::CommandReceiver;
use crate::term::{render_frame, Frame, FrameSink};
use crate::types::Command;

/// What the loop should do after one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
    GameOver,
}

/// How a game finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// The player asked to exit.
    Quit { score: u32 },
    /// A new piece collided at spawn.
    GameOver { score: u32 },
}

impl GameEnd {
    pub fn score(&self) -> u32 {
        match self {
            GameEnd::Quit { score } | GameEnd::GameOver { score } => *score,
        }
    }
}

pub struct ControlLoop {
    board: Board,
    controls: Controls,
    speedup: f64,
    poll_interval: Duration,
    outpaced: bool,
}

impl ControlLoop {
    /// Speed-up factor and poll interval come from `config`; the gravity
    /// interval starts at whatever `controls` currently publishes.
    pub fn new(board: Board, controls: Controls, config: &GameConfig) -> Self {
        Self {
            board,
            controls,
            speedup: config.speedup,
            poll_interval: config.poll_interval,
            outpaced: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// Apply one dequeued command.
    ///
    /// Every command that raises the score shortens the gravity interval.
    pub fn handle(&mut self, command: Command) -> Result<Flow, InvariantViolation> {
        let action = match command {
            Command::Exit => return Ok(Flow::Exit),
            Command::Action(action) => action,
        };

        let score_before = self.board.score();
        let outcome = self.board.apply(action)?;

        if let ApplyOutcome::Locked { lines_cleared } = outcome {
            if lines_cleared > 0 {
                debug!("cleared {} line(s), score {}", lines_cleared, self.board.score());
            }
        }
        if self.board.score() > score_before {
            self.speed_up();
        }

        if outcome.is_game_over() {
            return Ok(Flow::GameOver);
        }
        Ok(Flow::Continue)
    }

    /// Current frame
    pub fn render(&self) -> Result<Frame, InvariantViolation> {
        render_frame(&self.board)
    }

    /// One poll cycle: redraw, then apply at most one queued command.
    ///
    /// Never waits on the queue. Returns the game result once the loop should end.
    pub fn step<S: FrameSink>(
        &mut self,
        rx: &mut CommandReceiver,
        sink: &mut S,
    ) -> Result<Option<GameEnd>> {
        sink.present(&self.render()?)?;

        let command = match rx.try_recv() {
            Ok(command) => command,
            Err(TryRecvError::Empty) => return Ok(None),
            Err(TryRecvError::Disconnected) => bail!("command queue closed"),
        };

        let flow = self.handle(command)?;
        let score = self.board.score();
        match flow {
            Flow::Continue => Ok(None),
            Flow::Exit => {
                info!("exit requested");
                Ok(Some(GameEnd::Quit { score }))
            }
            Flow::GameOver => {
                info!("game over");
                Ok(Some(GameEnd::GameOver { score }))
            }
        }
    }

    /// Shrink the gravity interval. There is no lower bound: once it drops
    /// below the poll interval, soft drops arrive faster than they are
    /// applied and queue up ahead of key presses.
    fn speed_up(&mut self) {
        let next = self.controls.tick_interval().mul_f64(self.speedup);
        debug!("gravity interval now {:?}", next);
        if next < self.poll_interval && !self.outpaced {
            warn!(
                "gravity interval {:?} is below the poll interval {:?}; soft drops will back up",
                next, self.poll_interval
            );
            self.outpaced = true;
        }
        self.controls.set_tick_interval(next);
    }
}
