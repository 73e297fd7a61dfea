//! Monte Carlo Tree Search (MCTS) for two-player zero-sum games.
//!
//! This crate provides a game-agnostic MCTS implementation that works with
//! any game implementing the `engine-core` `GameState` trait.
//!
//! # Overview
//!
//! MCTS builds a partial search tree by running simulations. Each
//! simulation consists of four phases:
//!
//! 1. **Selection**: Traverse the tree using UCB1 to balance exploration
//!    and exploitation
//! 2. **Expansion**: Attach one untried move of the selected node as a new
//!    child
//! 3. **Simulation**: Play uniformly random moves from the new child until
//!    the game ends
//! 4. **Backpropagation**: Credit the outcome along the path from the
//!    child back to the root
//!
//! Rewards are always scored from the perspective of the player to move at
//! the root, captured once per search. The returned move is the root child
//! with the most visits.
//!
//! # Usage
//!
//! ```rust,ignore
//! use games_tictactoe::State;
//! use mcts::{Mcts, MctsConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let engine = Mcts::new(MctsConfig::default().with_iterations(2000))?;
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//!
//! let best = engine.search(&State::new(), &mut rng)?;
//! println!("Best move: {best}");
//! ```
//!
//! # Configuration
//!
//! The [`MctsConfig`] struct controls search behavior:
//!
//! - `iterations`: number of simulations per search (default: 500)
//! - `exploration_constant`: UCB1 trade-off coefficient `c`
//!   (default: sqrt(2), the standard choice for rewards in [0, 1])

pub mod config;
pub mod node;
pub mod search;
pub mod tree;

// Re-export main types
pub use config::MctsConfig;
pub use node::{Node, NodeId};
pub use search::{Mcts, MctsSearch, SearchError};
pub use tree::{SearchTree, TreeStats};
