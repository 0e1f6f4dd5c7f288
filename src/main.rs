//! Tic Tac Toe - terminal entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::sync::Arc;
use tictactoe::{Settings, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = Settings::load_or_default(&cli.config)?;
    if let Some(theme) = cli.theme {
        settings = settings.with_theme(theme);
    }
    if let Some(log_file) = cli.log_file {
        settings = settings.with_log_file(log_file);
    }

    initialize_tracing(&settings)?;
    info!(config = %cli.config.display(), "Settings resolved");

    run_tui(&settings)
}

/// Sends logs to a file so they never draw over the game screen.
fn initialize_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
