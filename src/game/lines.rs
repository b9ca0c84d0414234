//! Win-line enumeration and evaluation
//!
//! A placement can only complete a line that passes through it, so win
//! checking inspects the candidate lines through the last-played cell:
//! its row, column, and depth line, the diagonals of the three axis planes
//! it sits on, and the four space diagonals. The center cell lies on all
//! thirteen candidates; corners lie on seven, face centers on five, edge
//! cells on four.

use super::board::{Board, Cell, Player};

/// Three cells that win the game when uniformly marked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line(pub [Cell; 3]);

impl Line {
    pub fn cells(&self) -> &[Cell; 3] {
        &self.0
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.0.contains(&cell)
    }
}

/// Every winning line that passes through `cell`, in family order: row,
/// column, depth line, XY / XZ / YZ plane diagonals, space diagonals.
pub fn lines_through(cell: Cell) -> Vec<Line> {
    let Cell { x, y, z } = cell;
    let mut lines = Vec::with_capacity(13);

    // Row, column, depth line: every cell lies on exactly one of each
    lines.push(Line([
        Cell::new(0, y, z),
        Cell::new(1, y, z),
        Cell::new(2, y, z),
    ]));
    lines.push(Line([
        Cell::new(x, 0, z),
        Cell::new(x, 1, z),
        Cell::new(x, 2, z),
    ]));
    lines.push(Line([
        Cell::new(x, y, 0),
        Cell::new(x, y, 1),
        Cell::new(x, y, 2),
    ]));

    // Diagonals of the XY plane at depth z
    if x == y {
        lines.push(Line([
            Cell::new(0, 0, z),
            Cell::new(1, 1, z),
            Cell::new(2, 2, z),
        ]));
    }
    if x + y == 2 {
        lines.push(Line([
            Cell::new(2, 0, z),
            Cell::new(1, 1, z),
            Cell::new(0, 2, z),
        ]));
    }

    // Diagonals of the XZ plane at height y
    if x == z {
        lines.push(Line([
            Cell::new(0, y, 0),
            Cell::new(1, y, 1),
            Cell::new(2, y, 2),
        ]));
    }
    if x + z == 2 {
        lines.push(Line([
            Cell::new(2, y, 0),
            Cell::new(1, y, 1),
            Cell::new(0, y, 2),
        ]));
    }

    // Diagonals of the YZ plane at column x
    if y == z {
        lines.push(Line([
            Cell::new(x, 0, 0),
            Cell::new(x, 1, 1),
            Cell::new(x, 2, 2),
        ]));
    }
    if y + z == 2 {
        lines.push(Line([
            Cell::new(x, 2, 0),
            Cell::new(x, 1, 1),
            Cell::new(x, 0, 2),
        ]));
    }

    // The four space diagonals
    if x == y && y == z {
        lines.push(Line([
            Cell::new(0, 0, 0),
            Cell::new(1, 1, 1),
            Cell::new(2, 2, 2),
        ]));
    }
    if x + y == 2 && y == z {
        lines.push(Line([
            Cell::new(2, 0, 0),
            Cell::new(1, 1, 1),
            Cell::new(0, 2, 2),
        ]));
    }
    if x + y == 2 && x == z {
        lines.push(Line([
            Cell::new(0, 2, 0),
            Cell::new(1, 1, 1),
            Cell::new(2, 0, 2),
        ]));
    }
    if x == y && x + z == 2 {
        lines.push(Line([
            Cell::new(2, 2, 0),
            Cell::new(1, 1, 1),
            Cell::new(0, 0, 2),
        ]));
    }

    lines
}

/// True when the mark just placed at `last` completes a line for `player`.
///
/// Only lines through `last` are inspected: a line elsewhere cannot have
/// become uniform on this move, and any line completed on an earlier move
/// would already have ended the game. An N-in-a-row generalization must
/// keep the same lines-through-the-move generator for this to stay sound.
pub fn evaluate_win(board: &Board, last: Cell, player: Player) -> bool {
    let mark = player.mark();
    lines_through(last)
        .iter()
        .any(|line| line.cells().iter().all(|&c| board.get(c) == Ok(mark)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Mark;

    #[test]
    fn test_every_cell_lies_on_its_lines() {
        for cell in Cell::all() {
            let lines = lines_through(cell);
            assert!(!lines.is_empty(), "no lines through {cell}");
            for line in &lines {
                assert!(line.contains(cell), "{cell} missing from {line:?}");
            }
        }
    }

    #[test]
    fn test_line_counts_by_cell_class() {
        // Center: row + column + depth + 6 plane diagonals + 4 space diagonals
        assert_eq!(lines_through(Cell::new(1, 1, 1)).len(), 13);
        // Corners: 3 axis lines + 3 plane diagonals + 1 space diagonal
        assert_eq!(lines_through(Cell::new(0, 0, 0)).len(), 7);
        assert_eq!(lines_through(Cell::new(2, 0, 0)).len(), 7);
        assert_eq!(lines_through(Cell::new(0, 2, 2)).len(), 7);
        assert_eq!(lines_through(Cell::new(2, 2, 2)).len(), 7);
        // Face centers: 3 axis lines + both diagonals of the face plane
        assert_eq!(lines_through(Cell::new(1, 1, 0)).len(), 5);
        assert_eq!(lines_through(Cell::new(0, 1, 1)).len(), 5);
        // Edge cells: 3 axis lines + 1 plane diagonal
        assert_eq!(lines_through(Cell::new(1, 0, 0)).len(), 4);
        assert_eq!(lines_through(Cell::new(2, 1, 0)).len(), 4);
    }

    #[test]
    fn test_distinct_lines_per_cell() {
        for cell in Cell::all() {
            let lines = lines_through(cell);
            for (i, a) in lines.iter().enumerate() {
                for b in &lines[i + 1..] {
                    assert_ne!(a, b, "duplicate line through {cell}");
                }
            }
        }
    }

    #[test]
    fn test_no_win_on_empty_board() {
        let board = Board::new();
        for cell in Cell::all() {
            assert!(!evaluate_win(&board, cell, Player::X));
            assert!(!evaluate_win(&board, cell, Player::O));
        }
    }

    #[test]
    fn test_space_diagonal_win() {
        let mut board = Board::new();
        board.set(Cell::new(0, 0, 0), Mark::X).unwrap();
        board.set(Cell::new(1, 1, 1), Mark::X).unwrap();
        board.set(Cell::new(2, 2, 2), Mark::X).unwrap();
        assert!(evaluate_win(&board, Cell::new(2, 2, 2), Player::X));
        assert!(evaluate_win(&board, Cell::new(1, 1, 1), Player::X));
        // The line is X's, not O's
        assert!(!evaluate_win(&board, Cell::new(2, 2, 2), Player::O));
    }

    #[test]
    fn test_anti_space_diagonal_win() {
        let mut board = Board::new();
        board.set(Cell::new(0, 2, 0), Mark::O).unwrap();
        board.set(Cell::new(1, 1, 1), Mark::O).unwrap();
        board.set(Cell::new(2, 0, 2), Mark::O).unwrap();
        assert!(evaluate_win(&board, Cell::new(1, 1, 1), Player::O));
    }

    #[test]
    fn test_row_win_detected_from_any_of_its_cells() {
        let mut board = Board::new();
        board.set(Cell::new(0, 2, 1), Mark::O).unwrap();
        board.set(Cell::new(1, 2, 1), Mark::O).unwrap();
        board.set(Cell::new(2, 2, 1), Mark::O).unwrap();
        for x in 0..3 {
            assert!(evaluate_win(&board, Cell::new(x, 2, 1), Player::O));
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(Cell::new(0, 0, 0), Mark::X).unwrap();
        board.set(Cell::new(1, 0, 0), Mark::O).unwrap();
        board.set(Cell::new(2, 0, 0), Mark::X).unwrap();
        assert!(!evaluate_win(&board, Cell::new(2, 0, 0), Player::X));
    }

    #[test]
    fn test_plane_diagonal_wins() {
        // XZ plane diagonal at y = 1
        let mut board = Board::new();
        board.set(Cell::new(0, 1, 0), Mark::X).unwrap();
        board.set(Cell::new(1, 1, 1), Mark::X).unwrap();
        board.set(Cell::new(2, 1, 2), Mark::X).unwrap();
        assert!(evaluate_win(&board, Cell::new(0, 1, 0), Player::X));

        // YZ anti-diagonal at x = 2
        let mut board = Board::new();
        board.set(Cell::new(2, 2, 0), Mark::O).unwrap();
        board.set(Cell::new(2, 1, 1), Mark::O).unwrap();
        board.set(Cell::new(2, 0, 2), Mark::O).unwrap();
        assert!(evaluate_win(&board, Cell::new(2, 0, 2), Player::O));
    }
}
