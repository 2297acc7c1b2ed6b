//! Self-play between engines
//!
//! `play_game` runs one game from the initial position, passing for a player
//! without legal moves and stopping once neither side can move.
//! `run_match` plays a configured series of games and tallies the results.

use log::{debug, info};
use reversi::{Board, Cell, CellState, Outcome, Player};

use crate::config::MatchConfig;
use crate::error::ArenaError;
use crate::Engine;

/// One turn of a recorded game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ply {
    Move {
        player: Player,
        cell: Cell,
        flipped: usize,
    },
    Pass(Player),
}

/// A finished game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub board: Board,
    pub plies: Vec<Ply>,
    pub outcome: Outcome,
}

impl GameRecord {
    /// Number of tokens placed (passes excluded)
    pub fn moves(&self) -> usize {
        self.plies
            .iter()
            .filter(|ply| matches!(ply, Ply::Move { .. }))
            .count()
    }
}

/// Results of a series of games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub black_wins: u32,
    pub white_wins: u32,
    pub ties: u32,
}

impl MatchSummary {
    pub fn games(&self) -> u32 {
        self.black_wins + self.white_wins + self.ties
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::Black) => self.black_wins += 1,
            Outcome::Winner(Player::White) => self.white_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
}

/// Play one game from the initial position
pub fn play_game<B, W>(black: &mut B, white: &mut W) -> Result<GameRecord, ArenaError>
where
    B: Engine + ?Sized,
    W: Engine + ?Sized,
{
    let mut board = Board::new();
    let mut plies = Vec::new();

    while !board.is_game_over() {
        let player = board.current_player();

        if !board.has_legal_move(player) {
            debug!("{:?} has no legal move and passes", player);
            board.pass_turn();
            plies.push(Ply::Pass(player));
            continue;
        }

        let (choice, engine) = match player {
            Player::Black => (black.choose_move(&board), black.name()),
            Player::White => (white.choose_move(&board), white.name()),
        };

        let cell = choice.ok_or_else(|| ArenaError::NoMoveChosen {
            engine: engine.to_string(),
        })?;
        let flipped = board
            .apply_move(cell)
            .map_err(|source| ArenaError::IllegalMove {
                engine: engine.to_string(),
                source,
            })?;

        debug!("{} ({:?}) plays {} flipping {}", engine, player, cell, flipped);
        plies.push(Ply::Move {
            player,
            cell,
            flipped,
        });
    }

    let outcome = board.winning_player();
    info!(
        "{} vs {}: {:?} ({} black, {} white)",
        black.name(),
        white.name(),
        outcome,
        board.count_tokens(CellState::Black),
        board.count_tokens(CellState::White)
    );

    Ok(GameRecord {
        board,
        plies,
        outcome,
    })
}

/// Play `config.games` games between the configured engines
pub fn run_match(config: &MatchConfig) -> Result<MatchSummary, ArenaError> {
    config.validate()?;

    let mut summary = MatchSummary::default();

    for game in 0..u64::from(config.games) {
        let seed = config.seed.wrapping_add(game.wrapping_mul(2));
        let mut black = config.black.build(seed);
        let mut white = config.white.build(seed.wrapping_add(1));

        let record = play_game(&mut *black, &mut *white)?;
        summary.record(record.outcome);
    }

    info!(
        "match over after {} games: black {} / white {} / ties {}",
        summary.games(),
        summary.black_wins,
        summary.white_wins,
        summary.ties
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineKind;
    use crate::error::ConfigError;
    use crate::greedy::GreedyEngine;
    use crate::random::RandomEngine;

    /// Always tries the top-left corner
    struct CornerEngine;

    impl Engine for CornerEngine {
        fn name(&self) -> &str {
            "Corner"
        }

        fn choose_move(&mut self, _board: &Board) -> Option<Cell> {
            Cell::new(0, 0).ok()
        }
    }

    /// Never picks anything
    struct SilentEngine;

    impl Engine for SilentEngine {
        fn name(&self) -> &str {
            "Silent"
        }

        fn choose_move(&mut self, _board: &Board) -> Option<Cell> {
            None
        }
    }

    /// Replays a record on a fresh board, checking every ply against the rules
    fn replay(record: &GameRecord) -> Board {
        let mut board = Board::new();
        for ply in &record.plies {
            match *ply {
                Ply::Move {
                    player,
                    cell,
                    flipped,
                } => {
                    assert_eq!(board.current_player(), player);
                    assert_eq!(board.apply_move(cell), Ok(flipped));
                }
                Ply::Pass(player) => {
                    assert_eq!(board.current_player(), player);
                    assert!(!board.has_legal_move(player));
                    board.pass_turn();
                }
            }
        }
        board
    }

    #[test]
    fn test_greedy_self_play_is_deterministic() {
        let first = play_game(&mut GreedyEngine, &mut GreedyEngine).unwrap();
        let second = play_game(&mut GreedyEngine, &mut GreedyEngine).unwrap();

        assert_eq!(first.plies, second.plies);
        assert_eq!(first.outcome, second.outcome);
    }

    #[test]
    fn test_record_is_consistent() {
        let record = play_game(&mut GreedyEngine, &mut RandomEngine::seeded(11)).unwrap();

        assert!(record.board.is_game_over());
        assert_eq!(record.outcome, record.board.winning_player());
        assert_eq!(replay(&record), record.board);

        let black = record.board.count_tokens(CellState::Black);
        let white = record.board.count_tokens(CellState::White);
        assert_eq!(black + white, 4 + record.moves());
        assert_eq!(black + white + record.board.count_tokens(CellState::Empty), 64);
    }

    #[test]
    fn test_illegal_engine_move_is_an_error() {
        let err = play_game(&mut CornerEngine, &mut GreedyEngine).unwrap_err();
        assert!(matches!(
            err,
            ArenaError::IllegalMove { ref engine, .. } if engine == "Corner"
        ));
    }

    #[test]
    fn test_engine_without_choice_is_an_error() {
        let err = play_game(&mut GreedyEngine, &mut SilentEngine).unwrap_err();
        assert!(matches!(
            err,
            ArenaError::NoMoveChosen { ref engine } if engine == "Silent"
        ));
    }

    #[test]
    fn test_boxed_engines_can_play() {
        let mut black: Box<dyn Engine> = EngineKind::Random.build(5);
        let mut white: Box<dyn Engine> = EngineKind::Greedy.build(0);

        let record = play_game(&mut *black, &mut *white).unwrap();
        assert_eq!(replay(&record), record.board);
    }

    #[test]
    fn test_run_match_counts_every_game() {
        let config = MatchConfig {
            games: 4,
            seed: 9,
            black: EngineKind::Random,
            white: EngineKind::Random,
        };

        let summary = run_match(&config).unwrap();
        assert_eq!(summary.games(), 4);
        assert_eq!(run_match(&config).unwrap(), summary);
    }

    #[test]
    fn test_run_match_rejects_invalid_config() {
        let config = MatchConfig {
            games: 0,
            ..MatchConfig::default()
        };

        assert!(matches!(
            run_match(&config),
            Err(ArenaError::Config(ConfigError::Validation(_)))
        ));
    }

    #[test]
    fn test_greedy_vs_greedy_match() {
        let config = MatchConfig {
            games: 2,
            seed: 0,
            black: EngineKind::Greedy,
            white: EngineKind::Greedy,
        };

        let summary = run_match(&config).unwrap();
        let single = play_game(&mut GreedyEngine, &mut GreedyEngine).unwrap();
        // Both games are identical
        let expected = match single.outcome {
            Outcome::Winner(Player::Black) => MatchSummary { black_wins: 2, ..Default::default() },
            Outcome::Winner(Player::White) => MatchSummary { white_wins: 2, ..Default::default() },
            Outcome::Tie => MatchSummary { ties: 2, ..Default::default() },
        };
        assert_eq!(summary, expected);
    }
}
