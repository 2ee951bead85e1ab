//! Moves and the history entries they produce.

use super::position::Position;
use super::types::{Board, Mark};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where the mark is placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// One snapshot in a session's timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    move_number: usize,
    board: Board,
    last_move: Option<Move>,
}

impl HistoryEntry {
    /// Entry 0: the empty board before any move.
    pub(crate) fn start() -> Self {
        Self {
            move_number: 0,
            board: Board::new(),
            last_move: None,
        }
    }

    /// Entry produced by playing `last_move` onto entry `move_number - 1`.
    pub(crate) fn after(move_number: usize, board: Board, last_move: Move) -> Self {
        Self {
            move_number,
            board,
            last_move: Some(last_move),
        }
    }

    /// Ordinal of this entry; 0 is the initial empty board.
    pub fn move_number(&self) -> usize {
        self.move_number
    }

    /// Board snapshot at this point.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Move that produced this entry, `None` for the start.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Jump-list label for this entry.
    pub fn description(&self) -> String {
        if self.move_number == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.move_number)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptions() {
        assert_eq!(HistoryEntry::start().description(), "Go to game start");
        let mv = Move::new(Mark::X, Position::Center);
        let entry = HistoryEntry::after(3, Board::new(), mv);
        assert_eq!(entry.description(), "Go to move #3");
        assert_eq!(entry.last_move(), Some(mv));
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(Mark::O, Position::TopRight).to_string(), "O -> Top-right");
    }
}
