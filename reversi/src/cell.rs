/// Board coordinates
use std::fmt;

use crate::GameError;

/// Number of rows and columns on the board
pub const BOARD_SIZE: usize = 8;

/// The 8 scan directions as (row delta, column delta)
pub(crate) const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// A cell position on the 8x8 board.
///
/// Equality, hashing and ordering all use both `row` and `column`; the
/// derived `Ord` is row-major, which is the order legal moves are reported in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Cell {
    row: u8,
    column: u8,
}

impl Cell {
    /// Create a cell, rejecting coordinates outside the board
    pub fn new(row: usize, column: usize) -> Result<Self, GameError> {
        if row >= BOARD_SIZE || column >= BOARD_SIZE {
            return Err(GameError::InvalidCoordinate { row, column });
        }
        Ok(Self::at(row, column))
    }

    /// Create a cell from a flat row-major index (`row * 8 + column`)
    pub fn from_index(index: usize) -> Result<Self, GameError> {
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    /// Unchecked constructor for coordinates already known to be in range
    pub(crate) const fn at(row: usize, column: usize) -> Self {
        Cell {
            row: row as u8,
            column: column as u8,
        }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn column(&self) -> usize {
        self.column as usize
    }

    /// Flat row-major index in `0..64`
    pub fn index(&self) -> usize {
        self.row() * BOARD_SIZE + self.column()
    }

    /// All 64 cells in row-major order
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE * BOARD_SIZE).map(|i| Cell::at(i / BOARD_SIZE, i % BOARD_SIZE))
    }

    /// The adjacent cell in direction `(dr, dc)`, or `None` off the board
    pub(crate) fn neighbor(&self, (dr, dc): (i8, i8)) -> Option<Cell> {
        let r = self.row as i8 + dr;
        let c = self.column as i8 + dc;
        let size = BOARD_SIZE as i8;
        if r >= 0 && r < size && c >= 0 && c < size {
            Some(Cell::at(r as usize, c as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.row, self.column)
    }
}
