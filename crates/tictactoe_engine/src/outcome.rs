//! Derived completion status of a board.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Outcome of a board, recomputed from the cells on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one empty cell.
    InProgress,
    /// A line of three belongs to this mark.
    Win(Mark),
    /// Board full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns true once no further moves are accepted.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
