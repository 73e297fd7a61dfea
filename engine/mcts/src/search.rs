//! MCTS search implementation.
//!
//! Implements the core MCTS algorithm:
//! 1. Selection: Descend via UCB1 while nodes are fully expanded
//! 2. Expansion: Attach one untried move as a new child
//! 3. Simulation: Uniformly random rollout to a terminal state
//! 4. Backpropagation: Credit the reward along the path to the root

use engine_core::{GameError, GameState};
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::MctsConfig;
use crate::node::NodeId;
use crate::tree::SearchTree;

/// Errors that can occur when constructing or running a search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The root state is already terminal.
    #[error("no legal moves at the search root")]
    NoLegalMoves,

    /// Rejected at engine construction, before any tree work begins.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A contract violation surfaced by the game. Never caught
    /// internally: it indicates corrupted untried-move bookkeeping or a
    /// premature result query.
    #[error(transparent)]
    Game(#[from] GameError),
}

/// MCTS engine with a configuration fixed at construction.
///
/// One engine can run any number of independent searches; each `search`
/// call builds, consults and discards its own tree.
#[derive(Debug, Clone)]
pub struct Mcts {
    config: MctsConfig,
}

impl Mcts {
    /// Create an engine, rejecting malformed configuration.
    pub fn new(config: MctsConfig) -> Result<Self, SearchError> {
        if config.iterations == 0 {
            return Err(SearchError::InvalidConfig(
                "iterations must be positive".to_string(),
            ));
        }
        if config.exploration_constant < 0.0 {
            return Err(SearchError::InvalidConfig(
                "exploration constant must be non-negative".to_string(),
            ));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Run a full search from `root_state` and return the chosen move.
    ///
    /// The caller's state is never mutated: the tree is rooted at a
    /// private copy and released before returning.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::NoLegalMoves` if `root_state` is terminal.
    pub fn search<G: GameState>(
        &self,
        root_state: &G,
        rng: &mut ChaCha20Rng,
    ) -> Result<G::Move, SearchError> {
        let mut search = MctsSearch::new(self.config.clone(), root_state)?;
        search.run(rng)
    }
}

/// A single search invocation.
///
/// Owns the tree rooted at a private copy of the root state, plus the
/// root player's perspective captured once at creation and reused for
/// every reward in this search.
pub struct MctsSearch<G: GameState> {
    tree: SearchTree<G>,
    config: MctsConfig,
    root_player: G::Player,
}

impl<G: GameState> MctsSearch<G> {
    /// Set up a search from the given root state.
    pub fn new(config: MctsConfig, root_state: &G) -> Result<Self, SearchError> {
        if root_state.is_terminal() || root_state.legal_moves().is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        let root_player = root_state.player_to_move();
        let tree = SearchTree::new(root_state.clone());

        Ok(Self {
            tree,
            config,
            root_player,
        })
    }

    /// Run the configured number of iterations and pick the final move.
    pub fn run(&mut self, rng: &mut ChaCha20Rng) -> Result<G::Move, SearchError> {
        for _ in 0..self.config.iterations {
            self.simulate(rng)?;
        }

        let stats = self.tree.stats();
        debug!(
            root_visits = stats.root_visits,
            nodes = stats.total_nodes,
            max_depth = stats.max_depth,
            "search finished"
        );

        self.tree
            .best_move()
            .map(|(mv, _)| mv)
            .ok_or(SearchError::NoLegalMoves)
    }

    /// Run a single iteration (select -> expand -> rollout -> backpropagate).
    fn simulate(&mut self, rng: &mut ChaCha20Rng) -> Result<(), SearchError> {
        let selected = self.select();
        let expanded = self.expand(selected, rng)?;
        let reward = self.rollout(expanded, rng)?;
        self.tree.backpropagate(expanded, reward);

        trace!(node = expanded.0, reward, "simulation complete");

        Ok(())
    }

    /// Phase 1: starting at the root, descend to the UCB1-maximal child
    /// while the current node is non-terminal and fully expanded.
    fn select(&self) -> NodeId {
        let mut current = self.tree.root();

        loop {
            let node = self.tree.get(current);

            if node.state.is_terminal() || !node.is_fully_expanded() {
                return current;
            }

            match self
                .tree
                .select_child(current, self.config.exploration_constant)
            {
                Some(child_id) => current = child_id,
                None => return current,
            }
        }
    }

    /// Phase 2: pick one untried move at random, attach the resulting
    /// child and return it. Terminal and fully expanded nodes are
    /// returned unchanged.
    fn expand(&mut self, node_id: NodeId, rng: &mut ChaCha20Rng) -> Result<NodeId, SearchError> {
        let node = self.tree.get(node_id);
        if node.state.is_terminal() || node.is_fully_expanded() {
            return Ok(node_id);
        }

        let pick = rng.gen_range(0..node.untried_moves.len());
        let mv = self.tree.get_mut(node_id).untried_moves.swap_remove(pick);
        let child_state = self.tree.get(node_id).state.apply(mv)?;

        Ok(self.tree.add_child(node_id, mv, child_state))
    }

    /// Phase 3: uniformly random playout from the node's state to a
    /// terminal state, scored from the root player's perspective. The
    /// playout runs on a private copy; tree states are never mutated.
    fn rollout(&self, node_id: NodeId, rng: &mut ChaCha20Rng) -> Result<f64, SearchError> {
        let mut state = self.tree.get(node_id).state.clone();

        while !state.is_terminal() {
            let moves = state.legal_moves();
            if moves.is_empty() {
                // broken game contract; surfaces as InvalidQuery below
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            state = state.apply(mv)?;
        }

        Ok(state.result_from_perspective(self.root_player)?)
    }

    /// The root player whose perspective fixes all rewards.
    pub fn root_player(&self) -> G::Player {
        self.root_player
    }

    /// Get the search tree (for inspection and tests).
    pub fn tree(&self) -> &SearchTree<G> {
        &self.tree
    }
}
