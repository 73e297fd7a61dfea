//! MCTS tree structure with arena allocation.
//!
//! Nodes live in a contiguous Vec owned by the tree and reference each
//! other by `NodeId` indices: children downward, a single parent index
//! upward. The arena is the sole owner of every node and is dropped
//! wholesale when the search that built it returns.

use engine_core::GameState;

use crate::node::{Node, NodeId};

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct SearchTree<G: GameState> {
    /// Arena storing all nodes
    nodes: Vec<Node<G>>,

    /// Root node index (always 0 after initialization)
    root: NodeId,
}

impl<G: GameState> SearchTree<G> {
    /// Create a new tree rooted at the given state.
    pub fn new(root_state: G) -> Self {
        let root_node = Node::new_root(root_state);
        Self {
            nodes: vec![root_node],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &Node<G> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node<G> {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node and return its ID.
    pub fn allocate(&mut self, node: Node<G>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the arena slice for read access.
    #[inline]
    pub fn arena(&self) -> &[Node<G>] {
        &self.nodes
    }

    /// Select the child of a node with the highest UCB1 score.
    pub fn select_child(&self, node_id: NodeId, c: f64) -> Option<NodeId> {
        let node = self.get(node_id);
        // Computed once instead of per-child comparison
        let parent_visits_ln = (node.visits.max(1) as f64).ln();

        node.children
            .iter()
            .max_by(|(_, id_a), (_, id_b)| {
                let score_a = self.get(*id_a).ucb1_score(parent_visits_ln, c);
                let score_b = self.get(*id_b).ucb1_score(parent_visits_ln, c);
                score_a
                    .partial_cmp(&score_b)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(_, id)| *id)
    }

    /// Add a child reached by playing `mv` from the parent.
    /// Returns the new child's NodeId.
    pub fn add_child(&mut self, parent_id: NodeId, mv: G::Move, state: G) -> NodeId {
        let child = Node::new_child(parent_id, mv, state);
        let child_id = self.allocate(child);

        self.get_mut(parent_id).children.push((mv, child_id));

        child_id
    }

    /// Backpropagate a reward from a node up to the root inclusive.
    ///
    /// Every node on the path gains one visit and the unmodified reward.
    /// The reward is from the fixed root player's perspective at every
    /// level; no per-ply sign flip is applied.
    pub fn backpropagate(&mut self, from: NodeId, reward: f64) {
        let mut current = from;

        while current.is_some() {
            let node = self.get_mut(current);
            node.visits += 1;
            node.value_sum += reward;
            current = node.parent;
        }
    }

    /// The most-visited direct child of the root, as (move, visits).
    ///
    /// Ties break toward the move encountered first in the root state's
    /// move-enumeration order, so the pick is deterministic regardless of
    /// the (randomized) order in which children were expanded.
    pub fn best_move(&self) -> Option<(G::Move, u32)> {
        let root = self.get(self.root);
        let mut best: Option<(G::Move, u32)> = None;

        for mv in root.state.legal_moves() {
            if let Some(&(_, child_id)) = root.children.iter().find(|(m, _)| *m == mv) {
                let visits = self.get(child_id).visits;
                if best.map_or(true, |(_, most)| visits > most) {
                    best = Some((mv, visits));
                }
            }
        }

        best
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visits,
            root_value: root.average_value(),
            max_depth: self.compute_max_depth(self.root, 0),
        }
    }

    fn compute_max_depth(&self, node_id: NodeId, current_depth: u32) -> u32 {
        let node = self.get(node_id);
        if node.children.is_empty() {
            return current_depth;
        }

        node.children
            .iter()
            .map(|(_, id)| self.compute_max_depth(*id, current_depth + 1))
            .max()
            .unwrap_or(current_depth)
    }
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub root_value: f64,
    pub max_depth: u32,
}
