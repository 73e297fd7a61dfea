//! Typed game-state trait and its error taxonomy
//!
//! A `GameState` is a value: applying a move produces a new state and never
//! edits the receiver. The engine relies on that to keep its tree nodes
//! independent of the caller's position and of each other.

use std::fmt;

/// Contract violations surfaced by a game implementation.
///
/// Both variants indicate programming errors rather than transient
/// conditions; callers propagate them unmodified instead of retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A move outside the current legal set was applied.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// The game result was queried on a non-terminal state.
    #[error("result queried on a non-terminal state")]
    InvalidQuery,
}

/// Main trait for game implementations
///
/// A position in a two-player, perfect-information, zero-sum game. States
/// are immutable values; `Clone` must produce a fully independent copy.
///
/// # Example
///
/// ```rust
/// use engine_core::{GameError, GameState};
///
/// // One shared pile; players alternate taking 1 or 2 counters and
/// // taking the last counter wins.
/// #[derive(Debug, Clone)]
/// struct Nim {
///     left: u32,
///     to_move: u8,
/// }
///
/// impl GameState for Nim {
///     type Move = u32;
///     type Player = u8;
///
///     fn player_to_move(&self) -> u8 {
///         self.to_move
///     }
///
///     fn legal_moves(&self) -> Vec<u32> {
///         (1..=2).filter(|&n| n <= self.left).collect()
///     }
///
///     fn apply(&self, mv: u32) -> Result<Self, GameError> {
///         if mv == 0 || mv > 2 || mv > self.left {
///             return Err(GameError::IllegalMove(mv.to_string()));
///         }
///         Ok(Nim {
///             left: self.left - mv,
///             to_move: 1 - self.to_move,
///         })
///     }
///
///     fn is_terminal(&self) -> bool {
///         self.left == 0
///     }
///
///     fn result_from_perspective(&self, root_player: u8) -> Result<f64, GameError> {
///         if !self.is_terminal() {
///             return Err(GameError::InvalidQuery);
///         }
///         // to_move has already alternated past the winning take
///         Ok(if self.to_move != root_player { 1.0 } else { 0.0 })
///     }
/// }
///
/// let start = Nim { left: 3, to_move: 0 };
/// assert_eq!(start.legal_moves(), vec![1, 2]);
/// assert!(start.apply(3).is_err());
/// ```
pub trait GameState: Clone + fmt::Debug + Send + Sync + 'static {
    /// Action type - should be small and Copy
    type Move: Copy + PartialEq + fmt::Debug + Send + Sync + 'static;

    /// Player identity type - compared to fix the reward perspective
    type Player: Copy + PartialEq + fmt::Debug + Send + Sync + 'static;

    /// The player whose turn it is in this state.
    fn player_to_move(&self) -> Self::Player;

    /// All moves playable from this state, in a deterministic order.
    /// Empty for terminal states.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Apply a move and return the resulting state with the turn
    /// alternated.
    ///
    /// # Errors
    ///
    /// Returns `GameError::IllegalMove` if `mv` is not currently legal.
    fn apply(&self, mv: Self::Move) -> Result<Self, GameError>;

    /// Whether the game has concluded (a player won, or no moves remain).
    fn is_terminal(&self) -> bool;

    /// Reward in [0, 1] from `root_player`'s perspective: 1.0 for a win,
    /// 0.0 for a loss, 0.5 for a draw.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidQuery` if the state is not terminal.
    fn result_from_perspective(&self, root_player: Self::Player) -> Result<f64, GameError>;
}
