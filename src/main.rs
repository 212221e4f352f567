//! Scarce Tic-Tac-Toe - CLI
//!
//! Inspects saved positions and replays move lists against the engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, MoveArg};
use scarce_tictactoe::{Board, EngineConfig, Snapshot, Symbol};
use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Inspect { snapshot } => {
            init_tracing(EngineConfig::default().log_filter());
            run_inspect(snapshot)
        }
        Command::Replay {
            size,
            config,
            moves,
        } => {
            let mut config = match config {
                Some(path) => EngineConfig::from_file(&path)?,
                None => EngineConfig::default(),
            };
            if let Some(size) = size {
                config = config.with_board_size(size);
            }
            init_tracing(config.log_filter());
            run_replay(&config, &moves)
        }
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Prints a saved position and its legal moves.
#[instrument(skip_all, fields(path = %path.display()))]
fn run_inspect(path: std::path::PathBuf) -> Result<()> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&content).context("Failed to parse snapshot")?;
    let board = Board::try_from(snapshot)?;
    info!(size = board.size(), turn = board.turn(), "Snapshot loaded");

    print_summary(&board);
    let moves: Vec<String> = board.valid_moves().iter().map(|m| m.to_string()).collect();
    println!("legal moves ({}): {}", moves.len(), moves.join(" "));
    Ok(())
}

/// Plays `moves` from an empty board, stopping at the first illegal one.
#[instrument(skip_all, fields(board_size = config.board_size(), moves = moves.len()))]
fn run_replay(config: &EngineConfig, moves: &[MoveArg]) -> Result<()> {
    let mut board = config.new_board()?;

    for (ix, arg) in moves.iter().enumerate() {
        let applied = match *arg {
            MoveArg::Index(index) => board.do_index(index),
            MoveArg::Explicit(request) => board.do_request(request),
        };
        if !applied {
            warn!(move_number = ix + 1, ?arg, "Illegal move, stopping replay");
            break;
        }
    }

    print_summary(&board);
    println!("{}", serde_json::to_string(&board.snapshot())?);
    Ok(())
}

fn print_summary(board: &Board) {
    println!("{board}");
    println!(
        "turn {} | {} to move | {} phase",
        board.turn(),
        board.current_symbol(),
        board.phase()
    );
    match board.check_winner() {
        Some(winner) => println!("winner: {winner}"),
        None => println!("winner: none"),
    }
    for symbol in Symbol::iter() {
        println!("score {}: {}", symbol, board.get_score(symbol));
    }
}
