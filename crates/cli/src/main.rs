//! `chess`: play in the terminal, against another person or the computer.
//!
//! Usage:
//!   chess --mode manual
//!   chess --mode ai --engine minimax --depth 3 --computer black
//!   chess --config game.toml --seed 42
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

mod config;
mod input;
mod play;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use chess_core::Board;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{GameConfig, Overrides};
use play::Session;

#[derive(Debug, Parser)]
#[command(name = "chess", version, about = "Terminal chess with random and minimax opponents")]
struct Cli {
    /// TOML file with game settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start from this FEN instead of the initial position
    #[arg(long)]
    fen: Option<String>,

    #[command(flatten)]
    overrides: Overrides,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    config.apply(&cli.overrides);
    info!(?config, "starting game");

    let board = match &cli.fen {
        Some(fen) => Board::from_fen(fen).with_context(|| format!("invalid --fen '{fen}'"))?,
        None => Board::new_game(),
    };

    let mut session = Session::new(&config, board);
    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
