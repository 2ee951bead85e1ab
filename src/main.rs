//! Tic-tac-toe - unified CLI
//!
//! Interactive terminal play or headless replay.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe_tui::{
    AppConfig, ReplayStep, init_file_logging, init_stderr_logging, run_script, run_tui,
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play { config: None }) {
        Command::Play { config } => run_play(config),
        Command::Replay { pretty, steps } => run_replay(pretty, &steps),
    }
}

/// Run the interactive terminal game
fn run_play(config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref()).context("Failed to load config")?;
    init_file_logging(&config)?;

    info!(show_history = *config.show_history(), "Configuration ready");
    run_tui(&config)
}

/// Run a scripted session and print the final state
fn run_replay(pretty: bool, steps: &[ReplayStep]) -> Result<()> {
    init_stderr_logging("warn");

    let report = run_script(steps);
    let json = if pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("Failed to serialize replay report")?;

    println!("{}", json);
    Ok(())
}
