//! Named board positions.

use super::error::MoveError;
use super::types::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row (0-2) of this position.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column (0-2) of this position.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Position at `row`, `col`, if both are on the board.
    pub fn at(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Returns the empty positions of `board` in index order.
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::iter().filter(|pos| board.is_empty(*pos)).collect()
    }
}

impl TryFrom<usize> for Position {
    type Error = MoveError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(MoveError::OffBoard(index))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_matches_all() {
        for (i, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::ALL[i], pos);
        }
    }

    #[test]
    fn test_off_board_index_rejected() {
        assert_eq!(Position::try_from(9), Err(MoveError::OffBoard(9)));
        assert_eq!(Position::try_from(4), Ok(Position::Center));
    }

    #[test]
    fn test_row_col() {
        assert_eq!(Position::MiddleRight.row(), 1);
        assert_eq!(Position::MiddleRight.col(), 2);
        assert_eq!(Position::at(2, 0), Some(Position::BottomLeft));
        assert_eq!(Position::at(3, 0), None);
    }
}
