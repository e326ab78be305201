//! Strictly N×N - Unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_nxn::{GameMode, Player, Session};
use strictly_nxn_cli::{AppConfig, AutomatedPlayer, HumanPlayer, Orchestrator, render, suggest};
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            size,
            win_length,
            mode,
            delay_ms,
            config,
        } => run_play(size, win_length, mode, delay_ms, config).await,
        Command::Suggest {
            board,
            player,
            win_length,
            json,
        } => run_suggest(&board, player, win_length, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
async fn run_play(
    size: Option<usize>,
    win_length: Option<usize>,
    mode: Option<GameMode>,
    delay_ms: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    }
    .with_overrides(size, win_length, mode, delay_ms);

    let session = Session::new(config.game_config(), *config.mode());
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let renderer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            println!("{}", render(&event));
        }
    });

    let mut orchestrator = Orchestrator::new(
        session,
        Box::new(HumanPlayer::new("You", BufReader::new(tokio::io::stdin()))),
        Box::new(AutomatedPlayer::new("Engine", config.thinking_delay())),
        event_tx,
    );
    let result = orchestrator.run().await;
    info!(score = %orchestrator.session().score(), "Session finished");

    // Closing the channel lets the renderer drain and exit.
    drop(orchestrator);
    renderer.await?;
    result
}

/// Print the engine's move for a single board
#[instrument]
fn run_suggest(
    board: &str,
    player: Option<Player>,
    win_length: Option<usize>,
    json: bool,
) -> Result<()> {
    let suggestion = suggest(board, player, win_length)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
    } else {
        println!("{}", suggestion);
    }
    Ok(())
}
