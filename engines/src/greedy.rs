//! Greedy Engine
//!
//! Algorithm Strategy:
//! - Evaluates all legal moves and selects one with maximum captures
//! - Breaks ties by choosing the first legal move in row-major order
//!
//! Key characteristics:
//! - No lookahead: one ply, purely greedy
//! - Deterministic: same board state always produces same move
//! - Only bracketed runs count as captures, so the predicted score of a move
//!   is exactly what playing it flips

use reversi::{Board, Cell};

use crate::Engine;

/// Engine that plays `Board::find_best_legal_move`
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyEngine;

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn choose_move(&mut self, board: &Board) -> Option<Cell> {
        board.find_best_legal_move()
    }
}

/// Predicted captures for every legal move of the player to move, in row-major order
pub fn compute_move_scores(board: &Board) -> Vec<(Cell, usize)> {
    board
        .get_legal_moves(board.current_player())
        .into_iter()
        .map(|cell| (cell, board.predict_flips(cell)))
        .collect()
}
