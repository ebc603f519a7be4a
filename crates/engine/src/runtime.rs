//! Running one game: spawn the producers, drive the consumer, tear down.

use anyhow::{anyhow, Context, Result};
use log::{error, info, warn};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::config::GameConfig;
use crate::context::Controls;
use crate::control::{ControlLoop, GameEnd};
use crate::core::Board;
use crate::input::KeySource;
use crate::producers::{gravity_producer, input_producer, CommandReceiver, CommandSender};
use crate::term::FrameSink;

/// Handles to the two background producers
struct Producers {
    input: JoinHandle<Result<()>>,
    gravity: JoinHandle<()>,
}

impl Producers {
    fn spawn<K: KeySource>(
        keys: K,
        tx: CommandSender,
        controls: &Controls,
        config: &GameConfig,
    ) -> Self {
        let input = {
            let tx = tx.clone();
            let ctx = controls.context();
            let poll = config.input_poll;
            tokio::task::spawn_blocking(move || input_producer(keys, tx, ctx, poll))
        };
        let gravity = tokio::spawn(gravity_producer(tx, controls.context(), config.ring_bell));
        Self { input, gravity }
    }

    /// The input producer only returns on stop or on a read failure.
    fn input_finished(&self) -> bool {
        self.input.is_finished()
    }

    /// Wait for both producers. Stop must already have been signalled.
    async fn join(self) -> Result<()> {
        let input = self.input.await;
        if let Err(e) = self.gravity.await {
            warn!("gravity producer panicked: {e}");
        }
        match input {
            Ok(result) => result.context("input producer failed"),
            Err(e) => Err(anyhow!("input producer panicked: {e}")),
        }
    }
}

/// Play one game to completion.
///
/// Keys come from `keys`, frames go to `sink`. Returns how the game ended;
/// an invariant violation or a failed input read is an error. The producers
/// are stopped and joined on every path.
pub async fn run_game<K, S>(
    config: &GameConfig,
    board: Board,
    keys: K,
    sink: &mut S,
) -> Result<GameEnd>
where
    K: KeySource,
    S: FrameSink,
{
    let controls = Controls::new(config.tick_interval);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let producers = Producers::spawn(keys, tx, &controls, config);
    let mut control = ControlLoop::new(board, controls, config);

    info!(
        "game started: {}x{} board, gravity {:?}",
        control.board().width(),
        control.board().height(),
        config.tick_interval
    );

    let result = consume(&mut control, &mut rx, sink, &producers, config).await;
    control.controls().stop();
    let joined = producers.join().await;

    match result {
        Ok(Some(end)) => {
            if let Err(e) = joined {
                warn!("{e:#}");
            }
            info!("game finished: {:?}", end);
            Ok(end)
        }
        Ok(None) => {
            joined?;
            Err(anyhow!("input producer exited early"))
        }
        Err(e) => {
            error!("control loop failed: {e:#}");
            Err(e)
        }
    }
}

/// Poll the queue until the game ends.
///
/// Ok(None) means the input producer stopped on its own.
async fn consume<S: FrameSink>(
    control: &mut ControlLoop,
    rx: &mut CommandReceiver,
    sink: &mut S,
    producers: &Producers,
    config: &GameConfig,
) -> Result<Option<GameEnd>> {
    let mut ticker = interval(config.poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        if producers.input_finished() {
            return Ok(None);
        }
        if let Some(end) = control.step(rx, sink)? {
            return Ok(Some(end));
        }
    }
}
