//! Cursor invariant: the cursor always names an existing entry.

use super::super::GameSession;
use super::Invariant;

/// Invariant: history is never empty and the cursor indexes into it.
pub struct CursorInBoundsInvariant;

impl Invariant<GameSession> for CursorInBoundsInvariant {
    fn holds(session: &GameSession) -> bool {
        !session.history.is_empty() && session.cursor < session.history.len()
    }

    fn description() -> &'static str {
        "Cursor points at an existing history entry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_holds_after_jump() {
        let mut session = GameSession::new();
        session.play_move(Position::Center).unwrap();
        session.jump_to(0).unwrap();
        assert!(CursorInBoundsInvariant::holds(&session));
    }

    #[test]
    fn test_dangling_cursor_violates() {
        let mut session = GameSession::new();
        session.cursor = 1;
        assert!(!CursorInBoundsInvariant::holds(&session));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut session = GameSession::new();
        session.history.clear();
        assert!(!CursorInBoundsInvariant::holds(&session));
    }
}
