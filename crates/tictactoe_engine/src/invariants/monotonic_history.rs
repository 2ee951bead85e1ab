//! Monotonic history invariant: each entry adds exactly one mark.

use super::super::{BoardEngine, GameSession};
use super::Invariant;

/// Invariant: the timeline only ever grows the board.
///
/// - Entry 0 is the empty board.
/// - Entry `n` carries move number `n`.
/// - Each entry differs from its predecessor in exactly one cell, which went
///   from empty to the mark of the recorded move.
/// - No entry follows a finished board.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameSession> for MonotonicHistoryInvariant {
    fn holds(session: &GameSession) -> bool {
        let Some(first) = session.history.first() else {
            return true;
        };
        if *first.board() != BoardEngine::empty_board() || first.last_move().is_some() {
            return false;
        }

        session
            .history
            .iter()
            .enumerate()
            .all(|(n, entry)| entry.move_number() == n)
            && session.history.windows(2).all(|pair| {
                let (before, after) = (pair[0].board(), pair[1].board());
                let Some(mv) = pair[1].last_move() else {
                    return false;
                };
                !BoardEngine::evaluate(before).is_finished()
                    && BoardEngine::apply_move(before, mv.position, mv.mark)
                        .is_ok_and(|expected| expected == *after)
            })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark to an unfinished predecessor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{HistoryEntry, Move};
    use crate::{Mark, Position};

    #[test]
    fn test_new_session_holds() {
        assert!(MonotonicHistoryInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let mut session = GameSession::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
        ] {
            session.play_move(pos).unwrap();
        }
        assert!(MonotonicHistoryInvariant::holds(&session));
    }

    #[test]
    fn test_skipped_board_violates() {
        let mut session = GameSession::new();
        session.play_move(Position::Center).unwrap();
        session.play_move(Position::TopLeft).unwrap();
        session.history.remove(1);
        assert!(!MonotonicHistoryInvariant::holds(&session));
    }

    #[test]
    fn test_mismatched_move_violates() {
        let mut session = GameSession::new();
        session.play_move(Position::Center).unwrap();
        let board = *session.history[1].board();
        session.history[1] = HistoryEntry::after(1, board, Move::new(Mark::X, Position::TopLeft));
        assert!(!MonotonicHistoryInvariant::holds(&session));
    }
}
