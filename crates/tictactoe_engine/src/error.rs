//! Error types for board moves and session operations.

use super::outcome::Outcome;
use super::position::Position;

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position is already marked.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board already has a winner or is a draw.
    #[display("Game is already over: {}", _0)]
    GameOver(Outcome),

    /// Raw index outside 0-8.
    #[display("Position {} is off the board (must be 0-8)", _0)]
    OffBoard(usize),
}

impl std::error::Error for MoveError {}

/// Error returned by [`crate::GameSession`] operations.
///
/// No variant leaves the session partially updated.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// Move into an occupied cell or into a finished game.
    #[display("Illegal move: {}", _0)]
    IllegalMove(MoveError),

    /// Jump to a history entry that does not exist.
    #[display("Move #{} is out of range (history has {} entries)", requested, len)]
    #[from(ignore)]
    OutOfRange {
        /// Requested move number.
        requested: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// A session invariant failed after a transition was computed.
    #[display("Invariant violation: {}", _0)]
    #[from(ignore)]
    InvariantViolation(#[error(not(source))] String),
}

impl GameError {
    /// True for conditions reachable through ordinary, possibly stale, input.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::IllegalMove(_) | GameError::OutOfRange { .. })
    }
}
