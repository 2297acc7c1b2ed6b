//! Reversi Engine Implementations
//!
//! This crate contains move-selection engines built on the `reversi` rules engine:
//! - `greedy`: one-ply greedy AI that maximizes immediate piece capture
//! - `random`: uniformly random legal moves, optionally seeded
//!
//! `arena` plays engines against each other and `config` describes such a match.

pub mod arena;
pub mod config;
pub mod error;
pub mod greedy;
pub mod random;

pub use arena::{play_game, run_match, GameRecord, MatchSummary, Ply};
pub use config::{EngineKind, MatchConfig};
pub use error::{ArenaError, ConfigError};
pub use greedy::{compute_move_scores, GreedyEngine};
pub use random::RandomEngine;

use reversi::{Board, Cell};

/// A move picker for the player whose turn it is on `board`.
pub trait Engine {
    fn name(&self) -> &str;

    /// Pick a legal move for `board.current_player()`.
    /// Returns `None` only when that player has no legal move.
    fn choose_move(&mut self, board: &Board) -> Option<Cell>;
}
