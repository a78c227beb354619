use std::{fs::File, path::{Path, PathBuf}, sync::Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

use termsnake::{app::App, board::Board, game::SnakeGame, term::TermCanvas};
use termsnake::config::{BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_LOG_FILTER, TILE_SIZE};

/// Snake in the terminal. WASD to steer, Esc or Ctrl+C to quit.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Write logs to this file (the game owns the terminal). Filter with RUST_LOG.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Seed for food placement, to replay the same game.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT, TILE_SIZE)?;
    let canvas = TermCanvas::new(board)?;

    match args.seed {
        Some(seed) => {
            let game = SnakeGame::with_rng(board, StdRng::seed_from_u64(seed))?;
            App::new(game, canvas).run()
        }
        None => {
            let game = SnakeGame::new(board)?;
            App::new(game, canvas).run()
        }
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Error creating log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
