//! Game session drivers: interactive play and scripted self-play.

use std::io::{self, Write};

use anyhow::{Context, Result};
use engine_core::GameState;
use games_tictactoe::{Player, State};
use mcts::{Mcts, MctsConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use crate::config::Config;

fn build_engine(config: &Config) -> Result<Mcts> {
    let mcts_config = MctsConfig::default()
        .with_iterations(config.iterations)
        .with_exploration_constant(config.exploration);

    Mcts::new(mcts_config).context("failed to construct engine")
}

fn seed_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    }
}

/// Human (O) against the engine (X), on the terminal.
pub fn play_interactive(config: &Config) -> Result<()> {
    let engine = build_engine(config)?;
    let mut rng = seed_rng(config.seed);
    let mut state = State::new();

    println!("You are O. Enter moves as indices 0..8:");
    println!("0 1 2\n3 4 5\n6 7 8\n");

    while !state.is_terminal() {
        if state.player_to_move() == Player::X {
            let mv = engine.search(&state, &mut rng)?;
            state = state.apply(mv)?;
            println!("\nEngine plays {mv}");
        } else {
            let mv = prompt_move(&state)?;
            state = state.apply(mv)?;
        }
        println!("{state}");
    }

    match state.winner() {
        Some(Player::X) => println!("Engine (X) wins!"),
        Some(Player::O) => println!("You (O) win!"),
        None => println!("Draw!"),
    }

    Ok(())
}

fn prompt_move(state: &State) -> Result<u8> {
    let legal = state.legal_moves();

    loop {
        print!("Your move {legal:?}: ");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;

        match line.trim().parse::<u8>() {
            Ok(mv) if legal.contains(&mv) => return Ok(mv),
            _ => println!("Invalid move, try again."),
        }
    }
}

/// Play scripted matches and print a result tally.
pub fn run_selfplay(config: &Config, games: u32, random_opponent: bool) -> Result<()> {
    let engine = build_engine(config)?;
    let mut rng = seed_rng(config.seed);

    let mut x_wins = 0u32;
    let mut o_wins = 0u32;
    let mut draws = 0u32;

    for game in 0..games {
        let winner = play_one(&engine, random_opponent, &mut rng)?;
        match winner {
            Some(Player::X) => x_wins += 1,
            Some(Player::O) => o_wins += 1,
            None => draws += 1,
        }
        debug!(game, ?winner, "game finished");
    }

    info!(x_wins, o_wins, draws, "self-play finished");
    println!("X: {x_wins}  O: {o_wins}  draws: {draws}");

    Ok(())
}

fn play_one(engine: &Mcts, random_opponent: bool, rng: &mut ChaCha20Rng) -> Result<Option<Player>> {
    let mut state = State::new();

    while !state.is_terminal() {
        let mv = if random_opponent && state.player_to_move() == Player::O {
            let legal = state.legal_moves();
            legal[rng.gen_range(0..legal.len())]
        } else {
            engine.search(&state, rng)?
        };
        state = state.apply(mv)?;
    }

    Ok(state.winner())
}
