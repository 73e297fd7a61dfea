//! Tic-tac-toe reference game
//!
//! A complete 3x3 tic-tac-toe implementation of the `engine-core`
//! `GameState` contract, used as the reference game for the search engine.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::GameState;
//! use games_tictactoe::{Player, State};
//!
//! let state = State::new();
//! assert_eq!(state.player_to_move(), Player::X);
//! assert_eq!(state.legal_moves().len(), 9);
//!
//! let state = state.apply(4).unwrap(); // X takes the center
//! assert_eq!(state.player_to_move(), Player::O);
//! ```

use std::fmt;

use engine_core::{GameError, GameState};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other player.
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Signed cell value: +1 for X, -1 for O.
    pub fn sign(self) -> i8 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

/// The 8 winning lines (3 rows, 3 columns, 2 diagonals).
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Tic-tac-toe position
///
/// Board cells hold +1 (X), -1 (O) or 0 (empty), indexed 0..9 row by row.
/// States are immutable values: `apply` returns a new state and never
/// edits the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    board: [i8; 9],
    player_to_move: Player,
}

impl State {
    /// Empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: [0; 9],
            player_to_move: Player::X,
        }
    }

    /// Build a position from raw cells (+1 = X, -1 = O, 0 = empty).
    pub fn from_board(board: [i8; 9], player_to_move: Player) -> Self {
        Self {
            board,
            player_to_move,
        }
    }

    /// The winning player, if any line sums to magnitude 3.
    pub fn winner(&self) -> Option<Player> {
        for line in &LINES {
            let sum: i8 = line.iter().map(|&i| self.board[i]).sum();
            if sum == 3 {
                return Some(Player::X);
            }
            if sum == -3 {
                return Some(Player::O);
            }
        }
        None
    }

    /// Raw cell values.
    pub fn board(&self) -> &[i8; 9] {
        &self.board
    }

    fn is_full(&self) -> bool {
        self.board.iter().all(|&cell| cell != 0)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for State {
    type Move = u8;
    type Player = Player;

    fn player_to_move(&self) -> Player {
        self.player_to_move
    }

    fn legal_moves(&self) -> Vec<u8> {
        if self.winner().is_some() {
            return Vec::new();
        }

        (0..9u8)
            .filter(|&pos| self.board[pos as usize] == 0)
            .collect()
    }

    fn apply(&self, mv: u8) -> Result<Self, GameError> {
        if mv >= 9 || self.board[mv as usize] != 0 || self.winner().is_some() {
            return Err(GameError::IllegalMove(mv.to_string()));
        }

        let mut board = self.board;
        board[mv as usize] = self.player_to_move.sign();

        Ok(Self {
            board,
            player_to_move: self.player_to_move.opponent(),
        })
    }

    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    fn result_from_perspective(&self, root_player: Player) -> Result<f64, GameError> {
        match self.winner() {
            Some(winner) if winner == root_player => Ok(1.0),
            Some(_) => Ok(0.0),
            None if self.is_full() => Ok(0.5),
            None => Err(GameError::InvalidQuery),
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "---------")?;
            }
            for col in 0..3 {
                let mark = match self.board[3 * row + col] {
                    1 => "X",
                    -1 => "O",
                    _ => " ",
                };
                if col > 0 {
                    write!(f, " |")?;
                }
                write!(f, " {mark}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
