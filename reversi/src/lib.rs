/// Core types and rules for Reversi (Othello)

mod board;
mod cell;

// PyO3 bindings module
#[cfg(feature = "python")]
pub mod bindings;

pub use board::Board;
pub use cell::{Cell, BOARD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("coordinate ({row}, {column}) is outside the 8x8 board")]
    InvalidCoordinate { row: usize, column: usize },

    #[error("{player:?} cannot play {cell}")]
    IllegalMove { cell: Cell, player: Player },
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(&self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Convert player to cell representation
    pub fn to_cell_state(&self) -> CellState {
        match self {
            Player::Black => CellState::Black,
            Player::White => CellState::White,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum CellState {
    #[default]
    Empty,
    Black,
    White,
}

impl CellState {
    /// The player owning this token, `None` for an empty cell
    pub fn player(&self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::Black => Some(Player::Black),
            CellState::White => Some(Player::White),
        }
    }
}

impl From<Player> for CellState {
    fn from(player: Player) -> Self {
        player.to_cell_state()
    }
}

/// Result of comparing token counts
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    Winner(Player),
    Tie,
}
