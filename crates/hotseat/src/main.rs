//! Hotseat - two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::HotseatConfig;
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = HotseatConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    initialize_tracing(config.log_file())?;
    info!(config = ?config, "Starting hotseat");

    tui::run(config)
}

/// Sends logs to a file so they don't interfere with the TUI.
#[instrument]
fn initialize_tracing(log_path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,hotseat=debug,hotseat_tictactoe=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
