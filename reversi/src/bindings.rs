use crate::{Board, Cell, CellState, GameError, Outcome, Player};
use ndarray::Array2;
use numpy::{PyArray1, PyArray2};
use pyo3::exceptions::PyValueError;
/// PyO3 bindings for the Reversi rules engine
/// Exposes the Rust Board implementation to Python
use pyo3::prelude::*;

fn player_to_py(player: Player) -> u8 {
    match player {
        Player::Black => 0,
        Player::White => 1,
    }
}

fn cell_from_action(action: usize) -> PyResult<Cell> {
    Cell::from_index(action).map_err(|_| {
        PyValueError::new_err(format!(
            "Action {} is out of range. Must be between 0 and 63 (inclusive).",
            action
        ))
    })
}

/// Python wrapper for the Reversi board
///
/// All rules are evaluated in Rust; Python only sees flat indices
/// (`action = row * 8 + col`) and numpy arrays.
#[pyclass]
pub struct ReversiGame {
    board: Board,
}

#[pymethods]
impl ReversiGame {
    /// Create a new game with the standard initial setup
    #[new]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Reset the game to the standard 4-piece starting position
    pub fn reset(&mut self) {
        self.board.reset();
    }

    /// Play a move for the current player
    ///
    /// Args:
    ///     action (int): Position on the board (0-63), where action = row * 8 + col
    ///
    /// Returns:
    ///     tuple: (valid, pieces_flipped, game_over)
    ///
    /// Raises:
    ///     ValueError: If action is out of range [0, 63]
    pub fn step(&mut self, action: usize) -> PyResult<(bool, usize, bool)> {
        let cell = cell_from_action(action)?;

        match self.board.apply_move(cell) {
            Ok(flipped) => Ok((true, flipped, self.board.is_game_over())),
            // Illegal moves are reported, not raised, so the caller can pick again
            Err(GameError::IllegalMove { .. }) => Ok((false, 0, self.board.is_game_over())),
            Err(err) => Err(PyValueError::new_err(err.to_string())),
        }
    }

    /// Hand the turn to the opponent (only meaningful when the mover has no legal move)
    pub fn pass_turn(&mut self) {
        self.board.pass_turn();
    }

    /// Get the current board state as a 2D numpy array
    ///
    /// Returns:
    ///     np.ndarray: Shape (8, 8) with dtype uint8 (0 = empty, 1 = black, 2 = white)
    pub fn get_board<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray2<u8>> {
        let state = self.board.state_array();
        let array = Array2::from_shape_fn((8, 8), |(row, col)| state[row * 8 + col]);

        Ok(PyArray2::from_owned_array(py, array))
    }

    /// Get legal moves for the current player
    ///
    /// Returns:
    ///     np.ndarray: Shape (64,) with dtype bool, True at index i if position i is legal
    pub fn get_legal_moves<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<bool>> {
        let moves = self.board.legal_move_mask(self.board.current_player());
        Ok(PyArray1::from_slice(py, &moves))
    }

    /// Greedy move for the current player as a flat index, or None
    pub fn best_move(&self) -> Option<usize> {
        self.board.find_best_legal_move().map(|cell| cell.index())
    }

    /// Get the current player: 0 for Black, 1 for White
    pub fn get_current_player(&self) -> u8 {
        player_to_py(self.board.current_player())
    }

    /// Get piece counts as (black_count, white_count)
    pub fn get_piece_counts(&self) -> (usize, usize) {
        (
            self.board.count_tokens(CellState::Black),
            self.board.count_tokens(CellState::White),
        )
    }

    /// Get the winner of the game
    ///
    /// Returns:
    ///     int: 0 = Black wins, 1 = White wins, 2 = Draw, 3 = Game not finished
    pub fn get_winner(&self) -> u8 {
        if !self.board.is_game_over() {
            return 3;
        }

        match self.board.winning_player() {
            Outcome::Winner(player) => player_to_py(player),
            Outcome::Tie => 2,
        }
    }
}

impl Default for ReversiGame {
    fn default() -> Self {
        Self::new()
    }
}

/// Greedy move for an arbitrary position
///
/// Args:
///     board (list): Flat board state as 64 elements (0=Empty, 1=Black, 2=White)
///     player (int): Player to move (1=Black, 2=White)
///
/// Returns:
///     int: Move index (0-63) or 255 if no legal moves
#[pyfunction]
fn best_move_py(board: Vec<u8>, player: u8) -> PyResult<u8> {
    if board.len() != 64 {
        return Err(PyValueError::new_err(format!(
            "Board must have exactly 64 elements, got {}",
            board.len()
        )));
    }

    let player = match player {
        1 => Player::Black,
        2 => Player::White,
        other => {
            return Err(PyValueError::new_err(format!(
                "Player must be 1 (Black) or 2 (White), got {}",
                other
            )))
        }
    };

    let mut position = Board::new();
    position.set_current_player(player);
    for (cell, &value) in Cell::all().zip(board.iter()) {
        let state = match value {
            0 => CellState::Empty,
            1 => CellState::Black,
            2 => CellState::White,
            other => {
                return Err(PyValueError::new_err(format!(
                    "Cell {} holds {}, expected 0, 1 or 2",
                    cell, other
                )))
            }
        };
        position.set(cell, state);
    }

    Ok(position
        .find_best_legal_move()
        .map_or(u8::MAX, |cell| cell.index() as u8))
}

/// Python module definition
///
/// This module can be imported in Python as `reversi`
#[pymodule]
fn reversi(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<ReversiGame>()?;
    m.add_function(wrap_pyfunction!(best_move_py, m)?)?;
    Ok(())
}
