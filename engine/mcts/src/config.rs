//! MCTS configuration parameters.

use std::f64::consts::SQRT_2;

/// Configuration for Monte Carlo Tree Search.
///
/// Fixed for the lifetime of one engine instance.
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Number of simulations to run per search.
    pub iterations: u32,

    /// Exploration constant `c` in the UCB1 formula.
    /// Higher values encourage exploration, lower values favor
    /// exploitation. sqrt(2) is the standard choice for rewards in [0, 1].
    pub exploration_constant: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 500,
            exploration_constant: SQRT_2,
        }
    }
}

impl MctsConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            iterations: 50,
            ..Self::default()
        }
    }

    /// Builder pattern: set the number of iterations.
    pub fn with_iterations(mut self, n: u32) -> Self {
        self.iterations = n;
        self
    }

    /// Builder pattern: set the UCB1 exploration constant.
    pub fn with_exploration_constant(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }
}
