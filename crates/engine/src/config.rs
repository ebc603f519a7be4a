//! Game configuration, fixed at startup.

use std::time::Duration;

use crate::core::Board;
use crate::types::{BoardSize, DEFAULT_TICK_MS, INPUT_POLL_MS, POLL_MS, SPEEDUP_FACTOR};

/// Startup settings for one game
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub board_size: BoardSize,
    /// Ring the terminal bell before every gravity tick.
    pub ring_bell: bool,
    /// Initial gravity interval.
    pub tick_interval: Duration,
    /// How often the consumer polls the queue and redraws.
    pub poll_interval: Duration,
    /// Timeout of one key read in the input producer.
    pub input_poll: Duration,
    /// Gravity interval multiplier applied whenever a command scores.
    pub speedup: f64,
    /// Fixed seed for the piece sequence, entropy if unset.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default(),
            ring_bell: false,
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            poll_interval: Duration::from_millis(POLL_MS),
            input_poll: Duration::from_millis(INPUT_POLL_MS),
            speedup: SPEEDUP_FACTOR,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Fresh board for these settings
    pub fn new_board(&self) -> Board {
        match self.seed {
            Some(seed) => Board::with_seed(self.board_size, seed),
            None => Board::new(self.board_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, BoardSize::Big);
        assert_eq!(config.tick_interval, Duration::from_millis(800));
        assert_eq!(config.poll_interval, Duration::from_millis(10));
        assert!(!config.ring_bell);
    }

    #[test]
    fn test_seeded_boards_match() {
        let config = GameConfig {
            board_size: BoardSize::Small,
            seed: Some(42),
            ..GameConfig::default()
        };
        let a = config.new_board();
        let b = config.new_board();
        assert_eq!(a.width(), 8);
        assert_eq!(a.active(), b.active());
        assert_eq!(a.upcoming(), b.upcoming());
    }
}
