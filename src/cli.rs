//! Command-line interface for scarce_tictactoe.

use clap::{Parser, Subcommand};
use scarce_tictactoe::MoveRequest;

/// Scarce Tic-Tac-Toe - inspect and replay positions
#[derive(Parser, Debug)]
#[command(name = "scarce_tictactoe")]
#[command(about = "Rules engine for N×N tic-tac-toe with token relocation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the state and legal moves of a saved position
    Inspect {
        /// Path to a JSON snapshot (`{"cells": [...], "turn": n}`)
        #[arg(short, long)]
        snapshot: std::path::PathBuf,
    },

    /// Play moves on an empty board and print the resulting snapshot
    Replay {
        /// Board side length (overrides the config file)
        #[arg(long)]
        size: Option<usize>,

        /// Path to an engine config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Moves as `to` or `from-to`; a bare index on an occupied square
        /// names no destination and stops the replay
        #[arg(value_parser = parse_move)]
        moves: Vec<MoveArg>,
    },
}

/// A move as typed on the command line.
#[derive(Debug, Clone, Copy)]
pub enum MoveArg {
    /// Bare square index, resolved against the board when played.
    Index(usize),
    /// Explicit source and destination.
    Explicit(MoveRequest),
}

fn parse_move(s: &str) -> Result<MoveArg, String> {
    if let Ok(index) = s.trim().parse::<usize>() {
        return Ok(MoveArg::Index(index));
    }
    s.parse::<MoveRequest>()
        .map(MoveArg::Explicit)
        .map_err(|e| format!("invalid move '{}': {}", s, e))
}
