//! The two background producers feeding the command queue.
//!
//! - The input producer waits on raw key reads and enqueues the mapped command.
//! - The gravity producer enqueues a soft drop every gravity interval.
//!
//! Both write into the same unbounded MPSC queue and check their
//! [`LoopContext`] once per iteration.

use std::time::Duration;

use anyhow::Result;
use log::{debug, warn};
use tokio::sync::mpsc;

use crate::context::LoopContext;
use crate::input::{command_for_key, KeySource};
use crate::types::{Command, GameAction};

pub type CommandSender = mpsc::UnboundedSender<Command>;
pub type CommandReceiver = mpsc::UnboundedReceiver<Command>;

/// Read keys until stopped.
///
/// Blocking: run it on a blocking thread. Each read waits at most `poll`, so
/// a stop request is noticed within one poll interval. Read failures end the
/// producer with the error.
pub fn input_producer<K: KeySource>(
    mut keys: K,
    tx: CommandSender,
    ctx: LoopContext,
    poll: Duration,
) -> Result<()> {
    while !ctx.is_stopped() {
        let Some(key) = keys.read_key(poll)? else {
            continue;
        };
        let Some(command) = command_for_key(key) else {
            continue;
        };

        debug!("key {:?} -> {:?}", key.code, command);
        if tx.send(command).is_err() {
            // Consumer is gone
            break;
        }
    }
    Ok(())
}

/// Enqueue a soft drop every gravity interval until stopped.
///
/// The interval is re-read from `ctx` before every sleep, so a speed-up
/// published by the control loop applies from the next tick on.
pub async fn gravity_producer(tx: CommandSender, mut ctx: LoopContext, ring_bell: bool) {
    while !ctx.is_stopped() {
        if ring_bell {
            if let Err(e) = crate::term::ring_bell() {
                warn!("bell failed: {e}");
            }
        }

        if tx.send(Command::Action(GameAction::SoftDrop)).is_err() {
            break;
        }

        let interval = ctx.tick_interval();
        tokio::select! {
            _ = ctx.stopped() => break,
            _ = tokio::time::sleep(interval) => {}
        }
    }
}
