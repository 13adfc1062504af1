// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chessboard CLI - Command-line interface for inspecting the board model
//!
//! Builds a game, optionally runs the initial setup and prints the result.
//! There are no game rules here; it exists for debugging the state model.

use anyhow::{anyhow, Context, Result};
use chessboard_cli::render::{render_board, render_piece_list};
use chessboard_core::GameState;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(
    name = "chessboard-cli",
    about = "Print a chess board state",
    version
)]
struct Args {
    /// Output format
    #[clap(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Skip the initial setup and show an empty board
    #[clap(long)]
    empty: bool,

    /// Also list every piece after the board (text format only)
    #[clap(long)]
    list: bool,

    /// Log level used when RUST_LOG is not set
    #[clap(long, default_value = "info")]
    log_level: String,
}

/// How the board is printed
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// ASCII diagram
    Text,
    /// serde_json dump of the game state
    Json,
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level {:?}", level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let mut game = GameState::new();
    if !args.empty {
        game.populate_board().context("initial setup failed")?;
    }
    tracing::info!(pieces = game.board().occupied_count(), turn = %game.turn(), "board ready");

    match args.format {
        Format::Text => {
            print!("{}", render_board(&game));
            if args.list {
                print!("{}", render_piece_list(&game));
            }
        }
        Format::Json => {
            let json = serde_json::to_string_pretty(&game).context("failed to encode game state")?;
            println!("{}", json);
        }
    }

    Ok(())
}
