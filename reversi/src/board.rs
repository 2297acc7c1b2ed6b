use std::collections::BTreeSet;

use log::trace;

use crate::cell::{Cell, BOARD_SIZE, DIRECTIONS};
use crate::{CellState, GameError, Outcome, Player};

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
    current_player: Player,
}

impl Board {
    /// Create a new board with the initial Reversi setup
    /// Initial setup has 4 pieces in the center:
    /// - (3,3) and (4,4) are Black
    /// - (3,4) and (4,3) are White
    pub fn new() -> Self {
        let mut cells = [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE];

        cells[3][3] = CellState::Black;
        cells[3][4] = CellState::White;
        cells[4][3] = CellState::White;
        cells[4][4] = CellState::Black;

        Board {
            cells,
            current_player: Player::Black, // Black always starts
        }
    }

    pub fn get(&self, cell: Cell) -> CellState {
        self.cells[cell.row()][cell.column()]
    }

    /// Overwrite a single cell, e.g. to set up a position
    pub fn set(&mut self, cell: Cell, state: CellState) {
        self.cells[cell.row()][cell.column()] = state;
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    /// All 64 `(Cell, CellState)` pairs in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        Cell::all().map(move |cell| (cell, self.get(cell)))
    }

    /// Check if `player` may place a token at `cell`
    /// A move is legal if:
    /// 1. The cell is empty
    /// 2. In at least one direction, a run of opponent tokens is closed by a token of `player`
    pub fn is_legal_move(&self, cell: Cell, player: Player) -> bool {
        if self.get(cell) != CellState::Empty {
            return false;
        }

        DIRECTIONS
            .iter()
            .any(|&direction| self.bracket_length(cell, player, direction) > 0)
    }

    /// Number of opponent tokens bracketed by `player` when playing `cell`, looking in one direction.
    /// Returns 0 when the run of opponent tokens hits the edge or an empty cell before a token of `player`.
    fn bracket_length(&self, cell: Cell, player: Player, direction: (i8, i8)) -> usize {
        let own = player.to_cell_state();
        let opponent = player.opponent().to_cell_state();

        let mut run = 0;
        let mut next = cell.neighbor(direction);

        while let Some(current) = next {
            match self.get(current) {
                state if state == opponent => {
                    run += 1;
                    next = current.neighbor(direction);
                }
                state if state == own => return run,
                _ => return 0,
            }
        }

        0
    }

    /// All legal moves for `player`, in row-major order
    pub fn get_legal_moves(&self, player: Player) -> BTreeSet<Cell> {
        Cell::all()
            .filter(|&cell| self.is_legal_move(cell, player))
            .collect()
    }

    /// Legal moves for `player` as a 64-element bool array
    /// Array is indexed as: index = row * 8 + col
    pub fn legal_move_mask(&self, player: Player) -> [bool; 64] {
        let mut mask = [false; 64];
        for cell in Cell::all() {
            mask[cell.index()] = self.is_legal_move(cell, player);
        }
        mask
    }

    pub fn has_legal_move(&self, player: Player) -> bool {
        Cell::all().any(|cell| self.is_legal_move(cell, player))
    }

    /// Play `cell` for the current player, flipping every bracketed opponent run.
    /// Returns the number of flipped tokens, or `IllegalMove` with the board left untouched.
    pub fn apply_move(&mut self, cell: Cell) -> Result<usize, GameError> {
        let player = self.current_player;

        if !self.is_legal_move(cell, player) {
            trace!("rejected move {} for {:?}", cell, player);
            return Err(GameError::IllegalMove { cell, player });
        }

        self.set(cell, player.to_cell_state());

        let mut total_flipped = 0;
        for direction in DIRECTIONS {
            total_flipped += self.flip_in_direction(cell, player, direction);
        }

        self.current_player = player.opponent();

        Ok(total_flipped)
    }

    /// Play `cell` for the current player; `false` if the move is illegal
    pub fn perform_move(&mut self, cell: Cell) -> bool {
        self.apply_move(cell).is_ok()
    }

    /// Flip the bracketed run next to `cell` in one direction
    /// Returns the number of pieces flipped
    fn flip_in_direction(&mut self, cell: Cell, player: Player, direction: (i8, i8)) -> usize {
        let run = self.bracket_length(cell, player, direction);

        let mut next = cell.neighbor(direction);
        for _ in 0..run {
            let Some(current) = next else { break };
            self.set(current, player.to_cell_state());
            next = current.neighbor(direction);
        }

        run
    }

    pub fn count_tokens(&self, state: CellState) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == state)
            .count()
    }

    /// Tokens the current player would flip by playing `cell`
    pub fn predict_flips(&self, cell: Cell) -> usize {
        self.predict_flips_for(cell, self.current_player)
    }

    /// Tokens `player` would flip by playing `cell`.
    /// Only bracketed runs count, so this matches what `apply_move` flips.
    pub fn predict_flips_for(&self, cell: Cell, player: Player) -> usize {
        DIRECTIONS
            .iter()
            .map(|&direction| self.bracket_length(cell, player, direction))
            .sum()
    }

    /// Greedy pick: the legal move flipping the most tokens for the current player.
    /// Ties go to the first move in row-major order.
    pub fn find_best_legal_move(&self) -> Option<Cell> {
        let mut best: Option<(Cell, usize)> = None;

        for cell in self.get_legal_moves(self.current_player) {
            let flips = self.predict_flips(cell);
            if best.map_or(true, |(_, max_flips)| flips > max_flips) {
                best = Some((cell, flips));
            }
        }

        best.map(|(cell, _)| cell)
    }

    pub fn winning_player(&self) -> Outcome {
        let black = self.count_tokens(CellState::Black);
        let white = self.count_tokens(CellState::White);

        if black > white {
            Outcome::Winner(Player::Black)
        } else if white > black {
            Outcome::Winner(Player::White)
        } else {
            Outcome::Tie
        }
    }

    /// Hand the turn to the opponent without placing a token
    pub fn pass_turn(&mut self) {
        trace!("{:?} passes", self.current_player);
        self.current_player = self.current_player.opponent();
    }

    /// The game is over when neither player has a legal move
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_move(Player::Black) && !self.has_legal_move(Player::White)
    }

    /// Get current board state as flat array [0=empty, 1=black, 2=white]
    /// Array is indexed as: index = row * 8 + col
    pub fn state_array(&self) -> [u8; 64] {
        let mut state = [0u8; 64];

        for (cell, cell_state) in self.cells() {
            state[cell.index()] = match cell_state {
                CellState::Empty => 0,
                CellState::Black => 1,
                CellState::White => 2,
            };
        }

        state
    }

    /// Reset board to initial state
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
