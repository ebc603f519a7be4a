//! Terminal falling-block game (default binary).
//!
//! Parses the command line, puts the terminal into raw/alternate-screen mode
//! and runs one game on a tokio runtime. The terminal is restored before the
//! final score is printed.

mod logging;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::warn;

use termtris::engine::{run_game, GameConfig, GameEnd};
use termtris::input::TerminalKeys;
use termtris::term::TerminalRenderer;
use termtris::types::{BoardSize, DEFAULT_TICK_MS};

/// Falling-block puzzle game for the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "termtris",
    version,
    about = "Falling-block puzzle game for the terminal",
    long_about = "Falling-block puzzle game for the terminal.\n\n\
        CONTROLS:\n  Left/Right, h/l, a/d   Move\n  Down, j, s             Soft drop\n  \
        Up, k, w               Rotate\n  Space                  Hard drop\n  \
        `                      Stash\n  q, Esc, Ctrl-C         Quit"
)]
struct Args {
    /// Board size preset: big (20x20), medium (10x10), small (8x8).
    #[arg(long, value_enum, default_value_t = BoardArg::Big, env = "TETRIS_BOARD")]
    board: BoardArg,

    /// Ring the terminal bell on every gravity tick.
    #[arg(long, env = "TETRIS_BELL")]
    bell: bool,

    /// Initial gravity interval in milliseconds.
    #[arg(
        long,
        value_name = "MS",
        default_value_t = DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u64).range(1..),
        env = "TETRIS_TICK_MS"
    )]
    tick_ms: u64,

    /// Fixed seed for the piece sequence.
    #[arg(long, env = "TETRIS_SEED")]
    seed: Option<u64>,

    /// Append log records to this file (level from RUST_LOG, default info).
    #[arg(long, value_name = "FILE", env = "TETRIS_LOG_PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BoardArg {
    Big,
    Medium,
    Small,
}

impl From<BoardArg> for BoardSize {
    fn from(arg: BoardArg) -> Self {
        match arg {
            BoardArg::Big => BoardSize::Big,
            BoardArg::Medium => BoardSize::Medium,
            BoardArg::Small => BoardSize::Small,
        }
    }
}

impl Args {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            board_size: self.board.into(),
            ring_bell: self.bell,
            tick_interval: Duration::from_millis(self.tick_ms),
            seed: self.seed,
            ..GameConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        logging::init(path)?;
    }
    let config = args.game_config();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&config, &mut term);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!("restoring terminal failed: {e:#}");
    }

    if let GameEnd::GameOver { score } = result? {
        println!("You Lose! Score {score}");
    }
    Ok(())
}

fn run(config: &GameConfig, term: &mut TerminalRenderer) -> Result<GameEnd> {
    let runtime = tokio::runtime::Runtime::new()?;
    let board = config.new_board();
    let end = runtime.block_on(run_game(config, board, TerminalKeys::new(), term));
    // The input thread notices the stop flag within one key poll
    runtime.shutdown_timeout(Duration::from_millis(100));
    end
}
