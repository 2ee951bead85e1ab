//! Serializable read model of a session.

use super::outcome::Outcome;
use super::position::Position;
use super::score::Score;
use super::session::GameSession;
use super::types::Mark;
use serde::Serialize;

/// Everything a renderer needs, copied out of a [`GameSession`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// Cells at the cursor in row-major order.
    pub board: [Option<Mark>; 9],
    /// Mark to move from the cursor.
    pub current_player: Mark,
    /// Outcome at the cursor.
    pub outcome: Outcome,
    /// Completed line at the cursor, if any.
    pub winning_line: Option<[Position; 3]>,
    /// Displayed history entry.
    pub cursor: usize,
    /// Jump-list labels, oldest first.
    pub history: Vec<String>,
    /// Running score.
    pub score: Score,
}

impl SessionSnapshot {
    pub(crate) fn from_session(session: &GameSession) -> Self {
        Self {
            board: session.current().cells().map(|cell| cell.mark()),
            current_player: session.current_player(),
            outcome: session.outcome(),
            winning_line: session.winning_line(),
            cursor: session.cursor(),
            history: session.history().iter().map(|e| e.description()).collect(),
            score: *session.score(),
        }
    }
}
