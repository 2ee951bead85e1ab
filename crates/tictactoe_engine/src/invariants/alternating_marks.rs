//! Alternating marks invariant: X, O, X, O, ... by move number.

use super::super::{GameSession, Mark};
use super::Invariant;

/// Invariant: the move recorded at entry `n` was made by the mark whose
/// turn it was after `n - 1` moves.
///
/// First move is always X.
pub struct AlternatingMarksInvariant;

impl Invariant<GameSession> for AlternatingMarksInvariant {
    fn holds(session: &GameSession) -> bool {
        session.history.iter().enumerate().skip(1).all(|(n, entry)| {
            entry
                .last_move()
                .is_some_and(|mv| mv.mark == Mark::for_move_number(n - 1))
        })
    }

    fn description() -> &'static str {
        "Marks alternate by move number (X, O, X, O, ...)"
    }
}
