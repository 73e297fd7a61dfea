//! Configuration for the CLI host
//!
//! CLI arguments take highest priority; defaults can be overridden
//! through environment variables (`MCTS_ITERATIONS`, `MCTS_EXPLORATION`,
//! `MCTS_LOG_LEVEL`).

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

fn default_iterations() -> u32 {
    std::env::var("MCTS_ITERATIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1000)
}

fn default_exploration() -> f64 {
    std::env::var("MCTS_EXPLORATION")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(std::f64::consts::SQRT_2)
}

fn default_log_level() -> String {
    std::env::var("MCTS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
}

#[derive(Parser, Debug, Clone)]
#[command(name = "mcts-cli")]
#[command(about = "Tic-tac-toe against a Monte Carlo Tree Search engine")]
pub struct Config {
    /// Number of MCTS iterations per move
    #[arg(long, default_value_t = default_iterations())]
    pub iterations: u32,

    /// UCB1 exploration constant
    #[arg(long, default_value_t = default_exploration())]
    pub exploration: f64,

    /// Seed for the engine's random source (entropy-seeded if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play in the terminal as O against the engine
    Play,

    /// Run engine-vs-engine (or engine-vs-random) matches and tally results
    Selfplay {
        /// Number of games to play
        #[arg(long, default_value_t = 20)]
        games: u32,

        /// Pit the engine against a uniform-random opponent
        #[arg(long)]
        random_opponent: bool,
    },
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(anyhow!("iterations must be greater than 0"));
        }

        if self.exploration < 0.0 || !self.exploration.is_finite() {
            return Err(anyhow!("exploration must be a non-negative number"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            iterations: 1000,
            exploration: std::f64::consts::SQRT_2,
            seed: None,
            log_level: "info".to_string(),
            command: Command::Play,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let mut config = base_config();
        config.iterations = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_exploration_rejected() {
        let mut config = base_config();
        config.exploration = -1.0;
        assert!(config.validate().is_err());
    }
}
