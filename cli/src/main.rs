//! Terminal host for the MCTS engine
//!
//! A thin binary that:
//! 1. Builds the engine from CLI/env configuration
//! 2. Plays tic-tac-toe in the terminal against a human
//! 3. Runs scripted self-play matches for quick strength checks

use anyhow::Result;
use clap::Parser;
use tracing::info;

mod config;
mod session;

use crate::config::{Command, Config};

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    init_tracing(&config.log_level)?;
    info!(
        iterations = config.iterations,
        exploration = config.exploration,
        "engine configured"
    );

    match &config.command {
        Command::Play => session::play_interactive(&config),
        Command::Selfplay {
            games,
            random_opponent,
        } => session::run_selfplay(&config, *games, *random_opponent),
    }
}
