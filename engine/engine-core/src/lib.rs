//! Core contract for two-player, perfect-information, zero-sum games
//!
//! This crate provides the abstractions consumed by the search engine:
//! - `GameState`: typed trait for immutable game positions
//! - `GameError`: contract violations surfaced by game implementations
//!
//! Game crates implement `GameState` for their position type; the engine
//! is generic over any implementation and never inspects a position beyond
//! this interface.

pub mod game;

// Re-export main types for convenience
pub use game::{GameError, GameState};
