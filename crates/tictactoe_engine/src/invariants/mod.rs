//! First-class invariants for a game session.
//!
//! Invariants are logical properties that must hold after every session
//! operation. [`crate::GameSession`] checks the full set on each candidate
//! state before committing it.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for a tuple of three invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_marks;
pub mod cursor_in_bounds;
pub mod monotonic_history;

pub use alternating_marks::AlternatingMarksInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use monotonic_history::MonotonicHistoryInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    MonotonicHistoryInvariant,
    AlternatingMarksInvariant,
    CursorInBoundsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameSession, Position};

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        let session = GameSession::new();
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut session = GameSession::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            session.play_move(pos).unwrap();
        }
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut session = GameSession::new();
        session.play_move(Position::Center).unwrap();
        session.history.swap(0, 1);
        session.cursor = 7;

        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 3);
    }
}
