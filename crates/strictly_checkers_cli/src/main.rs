//! Strictly Checkers - terminal front end
//!
//! Plays the truth-table checkers game against the AI and exposes a few
//! inspection commands for the logic tables.

#![warn(missing_docs)]

mod cli;
mod terminal;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_checkers::{CheckersGame, GameConfig, Operator, Selection, hint_for};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they don't interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play { config, seed } => run_play(&config, seed).await,
        Command::Table { operator, variant } => run_table(operator, variant),
        Command::Hint { operator, variant } => run_hint(operator, variant),
        Command::Snapshot { seed } => run_snapshot(seed),
    }
}

/// Play an interactive game
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_play(config_path: &Path, seed: Option<u64>) -> Result<()> {
    let config = load_config(config_path)?;
    let config = match seed {
        Some(seed) => config.with_seed(Some(seed)),
        None => config,
    };
    info!(?config, "Starting terminal game");
    terminal::run(config).await
}

/// Loads the config file, falling back to defaults when it is absent.
fn load_config(path: &Path) -> Result<GameConfig> {
    if !path.exists() {
        info!(path = %path.display(), "No config file, using defaults");
        return Ok(GameConfig::default());
    }
    GameConfig::from_file(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

/// Print a full truth table
fn run_table(operator: Operator, variant: Option<usize>) -> Result<()> {
    let selection = selection_for(operator, variant)?;
    print!("{}", terminal::render::truth_table(operator, selection));
    Ok(())
}

/// Print hint text
fn run_hint(operator: Operator, variant: Option<usize>) -> Result<()> {
    let selection = selection_for(operator, variant)?;
    println!("{}", hint_for(operator, selection));
    Ok(())
}

/// Print the opening snapshot as JSON
fn run_snapshot(seed: Option<u64>) -> Result<()> {
    let game = CheckersGame::new(GameConfig::default().with_seed(seed));
    println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    Ok(())
}

fn selection_for(operator: Operator, variant: Option<usize>) -> Result<Option<Selection>> {
    let Some(index) = variant else {
        return Ok(None);
    };
    if !operator.has_selection() {
        warn!(%operator, index, "Operator has no variants, ignoring index");
        return Ok(None);
    }
    match Selection::from_index(operator, index) {
        Some(selection) => Ok(Some(selection)),
        None => bail!("{operator} has no variant {index}"),
    }
}
