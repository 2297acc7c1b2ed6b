use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use reversi::{Board, Cell};

use crate::Engine;

/// An engine that selects uniformly at random from legal moves.
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        RandomEngine {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible engine: the same seed picks the same moves on the same boards.
    pub fn seeded(seed: u64) -> Self {
        RandomEngine {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, board: &Board) -> Option<Cell> {
        let moves: Vec<Cell> = board
            .get_legal_moves(board.current_player())
            .into_iter()
            .collect();
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..moves.len());
        Some(moves[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi::CellState;

    #[test]
    fn test_random_engine_selects_legal_move() {
        let mut engine = RandomEngine::new();
        let board = Board::new();
        let legal = board.get_legal_moves(board.current_player());

        for _ in 0..100 {
            let chosen = engine.choose_move(&board).unwrap();
            assert!(legal.contains(&chosen), "Move {} is not legal", chosen);
        }
    }

    #[test]
    fn test_seeded_engines_agree() {
        let mut first = RandomEngine::seeded(17);
        let mut second = RandomEngine::seeded(17);
        let mut board = Board::new();

        while let Some(chosen) = first.choose_move(&board) {
            assert_eq!(second.choose_move(&board), Some(chosen));
            assert!(board.perform_move(chosen));
        }
    }

    #[test]
    fn test_random_engine_plays_full_game() {
        let mut engine = RandomEngine::seeded(3);
        let mut board = Board::new();

        while !board.is_game_over() {
            match engine.choose_move(&board) {
                Some(chosen) => assert!(board.perform_move(chosen)),
                None => board.pass_turn(),
            }
        }

        assert!(board.is_game_over());
        assert!(board.count_tokens(CellState::Empty) < 60);
    }

    #[test]
    fn test_random_engine_name() {
        assert_eq!(RandomEngine::seeded(0).name(), "Random");
    }
}
