//! Stateless board evaluation and transitions.

use super::error::MoveError;
use super::outcome::Outcome;
use super::position::Position;
use super::rules;
use super::types::{Board, Mark};
use tracing::{debug, instrument};

/// Pure transition and evaluation logic for a single board.
///
/// Holds no state. Every function takes a board snapshot and returns a new
/// value without touching its input.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardEngine;

impl BoardEngine {
    /// Returns a board of nine empty cells.
    pub fn empty_board() -> Board {
        Board::new()
    }

    /// Places `mark` at `position`, returning the resulting board.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the board already has a winner or is a draw.
    /// - [`MoveError::SquareOccupied`] if the cell is not empty.
    #[instrument(skip_all, fields(position = %position, mark = %mark))]
    pub fn apply_move(board: &Board, position: Position, mark: Mark) -> Result<Board, MoveError> {
        let outcome = Self::evaluate(board);
        if outcome.is_finished() {
            debug!(%outcome, "Rejected move on finished board");
            return Err(MoveError::GameOver(outcome));
        }

        if !board.is_empty(position) {
            debug!("Rejected move into occupied cell");
            return Err(MoveError::SquareOccupied(position));
        }

        Ok(board.with_mark(position, mark))
    }

    /// Evaluates the outcome of a board.
    ///
    /// The first completed line in [`rules::LINES`] order wins; otherwise a
    /// full board is a draw.
    #[instrument(level = "trace", skip(board))]
    pub fn evaluate(board: &Board) -> Outcome {
        if let Some(mark) = rules::check_winner(board) {
            Outcome::Win(mark)
        } else if rules::is_full(board) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Returns the completed line, if any, for highlighting.
    pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
        rules::winning_line(board).map(|(_, line)| line)
    }

    /// Returns the positions still open on `board`.
    ///
    /// Empty once the board is finished, even if cells remain.
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        if Self::evaluate(board).is_finished() {
            Vec::new()
        } else {
            Position::valid_moves(board)
        }
    }
}
