//! Board occupancy and cell addressing
//!
//! Cells are addressed by (x, y, z) with every component in {0, 1, 2}.
//! A cell is written at most once: `Empty` to a player mark, then frozen
//! for the rest of the game.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{CELL_COUNT, GRID_DIM};

/// One of the 27 positions in the 3x3x3 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

impl Cell {
    pub const fn new(x: u8, y: u8, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Every component within the grid
    #[inline]
    pub fn in_bounds(&self) -> bool {
        self.x < GRID_DIM && self.y < GRID_DIM && self.z < GRID_DIM
    }

    /// Linear index, x fastest
    #[inline]
    pub(crate) fn index(&self) -> usize {
        self.x as usize + 3 * self.y as usize + 9 * self.z as usize
    }

    /// All cells in canonical order: z outermost, then y, then x
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..GRID_DIM).flat_map(|z| {
            (0..GRID_DIM).flat_map(move |y| (0..GRID_DIM).map(move |x| Cell::new(x, y, z)))
        })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Occupancy value of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

/// One of the two players; X moves first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark this player writes
    pub fn mark(self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Board access errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate outside the 3x3x3 grid
    #[error("cell {0} is outside the 3x3x3 grid")]
    OutOfRange(Cell),
    /// The cell already holds a mark
    #[error("cell {0} is already occupied")]
    Occupied(Cell),
    /// Only player marks can be written
    #[error("cannot place an empty mark")]
    EmptyMark,
}

/// The 3x3x3 occupancy grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// All cells empty
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    /// Mark at `cell`
    pub fn get(&self, cell: Cell) -> Result<Mark, BoardError> {
        if !cell.in_bounds() {
            return Err(BoardError::OutOfRange(cell));
        }
        Ok(self.cells[cell.index()])
    }

    /// Write `mark` into an empty cell; the write is permanent
    pub fn set(&mut self, cell: Cell, mark: Mark) -> Result<(), BoardError> {
        if mark == Mark::Empty {
            return Err(BoardError::EmptyMark);
        }
        match self.get(cell)? {
            Mark::Empty => {
                self.cells[cell.index()] = mark;
                Ok(())
            }
            _ => Err(BoardError::Occupied(cell)),
        }
    }

    /// True when all 27 cells hold a mark
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&m| m != Mark::Empty)
    }

    /// Number of marks on the board
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|&&m| m != Mark::Empty).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for cell in Cell::all() {
            assert_eq!(board.get(cell), Ok(Mark::Empty));
        }
        assert!(!board.is_full());
        assert_eq!(board.mark_count(), 0);
    }

    #[test]
    fn test_set_then_get() {
        let mut board = Board::new();
        let cell = Cell::new(2, 0, 1);
        board.set(cell, Mark::X).unwrap();
        assert_eq!(board.get(cell), Ok(Mark::X));
        assert_eq!(board.mark_count(), 1);
    }

    #[test]
    fn test_set_occupied_rejected() {
        let mut board = Board::new();
        let cell = Cell::new(1, 1, 1);
        board.set(cell, Mark::O).unwrap();
        assert_eq!(board.set(cell, Mark::X), Err(BoardError::Occupied(cell)));
        // First write survives
        assert_eq!(board.get(cell), Ok(Mark::O));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut board = Board::new();
        let bad = Cell::new(3, 0, 0);
        assert_eq!(board.get(bad), Err(BoardError::OutOfRange(bad)));
        assert_eq!(board.set(bad, Mark::X), Err(BoardError::OutOfRange(bad)));
    }

    #[test]
    fn test_empty_mark_rejected() {
        let mut board = Board::new();
        let cell = Cell::new(0, 0, 0);
        assert_eq!(board.set(cell, Mark::Empty), Err(BoardError::EmptyMark));
        assert_eq!(board.get(cell), Ok(Mark::Empty));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        for (i, cell) in Cell::all().enumerate() {
            assert!(!board.is_full());
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board.set(cell, mark).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(board.mark_count(), 27);
    }

    #[test]
    fn test_all_enumerates_27_distinct_cells_z_major() {
        let cells: Vec<Cell> = Cell::all().collect();
        assert_eq!(cells.len(), 27);
        assert_eq!(cells[0], Cell::new(0, 0, 0));
        assert_eq!(cells[1], Cell::new(1, 0, 0));
        assert_eq!(cells[3], Cell::new(0, 1, 0));
        assert_eq!(cells[9], Cell::new(0, 0, 1));
        assert_eq!(cells[26], Cell::new(2, 2, 2));
        // Indices match the enumeration order
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.index(), i);
        }
    }
}
