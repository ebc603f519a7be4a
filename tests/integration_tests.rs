//! Integration tests for the full control loop
//!
//! Each test drives `run_game` with scripted key presses and records every
//! frame the consumer presents.

use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use termtris::core::{Board, Grid, InvariantViolation, Piece};
use termtris::engine::{run_game, GameConfig, GameEnd};
use termtris::input::{KeySource, ScriptedKeys};
use termtris::term::{Frame, FrameSink};
use termtris::types::{BoardSize, Rotation, Shape};

#[derive(Default)]
struct RecordingSink {
    frames: Vec<Frame>,
}

impl FrameSink for RecordingSink {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

/// Key reads that always fail, like a terminal that went away
struct BrokenKeys;

impl KeySource for BrokenKeys {
    fn read_key(&mut self, _timeout: Duration) -> Result<Option<KeyEvent>> {
        Err(anyhow!("terminal closed"))
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Slow gravity and fast polling so tests finish quickly and deterministically
fn test_config() -> GameConfig {
    GameConfig {
        board_size: BoardSize::Medium,
        tick_interval: Duration::from_secs(3600),
        poll_interval: Duration::from_millis(1),
        seed: Some(12345),
        ..GameConfig::default()
    }
}

#[tokio::test]
async fn test_quit_key_ends_game() {
    let config = test_config();
    let mut sink = RecordingSink::default();

    let end = run_game(
        &config,
        config.new_board(),
        ScriptedKeys::new([key(KeyCode::Char('q'))]),
        &mut sink,
    )
    .await
    .unwrap();

    assert_eq!(end, GameEnd::Quit { score: 0 });
    assert!(!sink.frames.is_empty());
    assert_eq!(sink.frames[0].lines()[0], "*".repeat(12));
}

#[tokio::test]
async fn test_ctrl_c_ends_game() {
    let config = test_config();
    let mut sink = RecordingSink::default();
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

    let end = run_game(&config, config.new_board(), ScriptedKeys::new([ctrl_c]), &mut sink)
        .await
        .unwrap();
    assert_eq!(end, GameEnd::Quit { score: 0 });
}

#[tokio::test]
async fn test_hard_drop_scores_then_quit() {
    let config = test_config();
    let board = Board::from_parts(
        Grid::from_rows(&[
            "........", //
            "........", //
            "........", //
            "........", //
            "#.######",
        ]),
        Piece::at(Shape::I, 1, 1, Rotation::North),
        [Piece::new(Shape::O)],
        1,
    );
    let keys = ScriptedKeys::new([key(KeyCode::Char(' ')), key(KeyCode::Char('q'))]);
    let mut sink = RecordingSink::default();

    let end = run_game(&config, board, keys, &mut sink).await.unwrap();
    assert_eq!(end, GameEnd::Quit { score: 1 });
    assert_eq!(end.score(), 1);
}

#[tokio::test]
async fn test_gravity_leads_to_game_over() {
    let config = GameConfig {
        tick_interval: Duration::from_millis(2),
        ..test_config()
    };
    let mut rows = vec!["...####..."; 4];
    rows.extend([".........."; 6]);
    let board = Board::from_parts(
        Grid::from_rows(&rows),
        Piece::at(Shape::O, 0, 6, Rotation::North),
        [Piece::new(Shape::T)],
        1,
    );
    let mut sink = RecordingSink::default();

    let end = tokio::time::timeout(
        Duration::from_secs(10),
        run_game(&config, board, ScriptedKeys::new([]), &mut sink),
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(end, GameEnd::GameOver { score: 0 });
}

#[tokio::test]
async fn test_failed_key_read_is_an_error() {
    let config = test_config();
    let mut sink = RecordingSink::default();

    let err = run_game(&config, config.new_board(), BrokenKeys, &mut sink)
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("terminal closed"));
}

#[tokio::test]
async fn test_overlapping_board_stops_the_game() {
    let config = test_config();
    let mut board = Board::from_parts(
        Grid::new(10, 10),
        Piece::at(Shape::O, 4, 4, Rotation::North),
        [Piece::new(Shape::T)],
        1,
    );
    board.grid_mut().set(5, 5, true);
    let mut sink = RecordingSink::default();

    let err = run_game(&config, board, ScriptedKeys::new([]), &mut sink)
        .await
        .unwrap_err();
    assert!(err.downcast_ref::<InvariantViolation>().is_some());
    assert!(sink.frames.is_empty());
}
