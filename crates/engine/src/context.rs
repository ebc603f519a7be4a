//! Cancellation and difficulty shared between the control loop and its producers.
//!
//! The control loop owns a [`Controls`]; each producer gets a [`LoopContext`]
//! at startup. Both values are published over `tokio::sync::watch`, so a
//! producer sees the latest stop flag and gravity interval on its next
//! iteration.

use std::time::Duration;

use tokio::sync::watch;

/// Write side, owned by the control loop
#[derive(Debug)]
pub struct Controls {
    stop: watch::Sender<bool>,
    tick: watch::Sender<Duration>,
}

impl Controls {
    pub fn new(tick_interval: Duration) -> Self {
        let (stop, _) = watch::channel(false);
        let (tick, _) = watch::channel(tick_interval);
        Self { stop, tick }
    }

    /// New read handle for a producer
    pub fn context(&self) -> LoopContext {
        LoopContext {
            stop: self.stop.subscribe(),
            tick: self.tick.subscribe(),
        }
    }

    /// Signal every loop to stop
    pub fn stop(&self) {
        self.stop.send_replace(true);
    }

    pub fn is_stopped(&self) -> bool {
        *self.stop.borrow()
    }

    pub fn tick_interval(&self) -> Duration {
        *self.tick.borrow()
    }

    pub fn set_tick_interval(&self, interval: Duration) {
        self.tick.send_replace(interval);
    }
}

/// Read side, handed to each producer
#[derive(Debug, Clone)]
pub struct LoopContext {
    stop: watch::Receiver<bool>,
    tick: watch::Receiver<Duration>,
}

impl LoopContext {
    /// True once stop was signalled or the controls were dropped
    pub fn is_stopped(&self) -> bool {
        *self.stop.borrow() || self.stop.has_changed().is_err()
    }

    /// Current gravity interval
    pub fn tick_interval(&self) -> Duration {
        *self.tick.borrow()
    }

    /// Resolve once the loop should stop
    pub async fn stopped(&mut self) {
        // Err means the controls are gone, which also means stop
        let _ = self.stop.wait_for(|stopped| *stopped).await;
    }
}
