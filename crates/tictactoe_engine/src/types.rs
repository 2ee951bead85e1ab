//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Mark placed by a player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Mark that moves next after `moves_made` moves.
    ///
    /// X moves on even counts, O on odd.
    pub fn for_move_number(moves_made: usize) -> Self {
        if moves_made % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// True when no mark has been placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are snapshots: there is no public setter, a move produces a new
/// board through [`crate::BoardEngine::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from raw cells.
    ///
    /// Any arrangement is accepted, including ones unreachable by legal play.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of marked cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Returns a copy with `mark` at `pos`, leaving `self` untouched.
    pub(crate) fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[pos.to_index()] = Cell::Marked(mark);
        Self { cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_mark_parity() {
        assert_eq!(Mark::for_move_number(0), Mark::X);
        assert_eq!(Mark::for_move_number(1), Mark::O);
        assert_eq!(Mark::for_move_number(8), Mark::X);
    }

    #[test]
    fn test_with_mark_leaves_original() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Mark::X);
        assert_eq!(board, Board::new());
        assert_eq!(next.get(Position::Center), Cell::Marked(Mark::X));
        assert_eq!(next.occupied(), 1);
    }
}
