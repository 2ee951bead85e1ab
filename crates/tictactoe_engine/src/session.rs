//! Game session: history timeline, time travel and scoreboard.

use super::engine::BoardEngine;
use super::error::GameError;
use super::history::{HistoryEntry, Move};
use super::invariants::{InvariantSet, SessionInvariants};
use super::outcome::Outcome;
use super::position::Position;
use super::score::Score;
use super::snapshot::SessionSnapshot;
use super::types::{Board, Mark};
use tracing::{debug, info, instrument, warn};

/// A sequence of games sharing one scoreboard.
///
/// Owns the board history of the current game, a cursor selecting the
/// displayed entry, and the running score. Every operation either commits
/// completely or returns an error with the session unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) cursor: usize,
    pub(crate) score: Score,
}

impl GameSession {
    /// Creates a session with an empty board and a zeroed score.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self {
            history: vec![HistoryEntry::start()],
            cursor: 0,
            score: Score::new(),
        }
    }

    /// History entry at the cursor.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history[self.cursor]
    }

    /// Board at the cursor.
    pub fn current(&self) -> &Board {
        self.current_entry().board()
    }

    /// Mark that moves next from the cursor.
    ///
    /// Derived from the cursor position alone, so it stays correct after a
    /// jump into the past.
    pub fn current_player(&self) -> Mark {
        Mark::for_move_number(self.cursor)
    }

    /// Outcome of the board at the cursor.
    pub fn outcome(&self) -> Outcome {
        BoardEngine::evaluate(self.current())
    }

    /// Completed line on the board at the cursor, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        BoardEngine::winning_line(self.current())
    }

    /// Positions that `play_move` would accept right now.
    pub fn valid_moves(&self) -> Vec<Position> {
        BoardEngine::valid_moves(self.current())
    }

    /// The whole timeline, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Most recent entry in the timeline.
    pub fn latest(&self) -> &HistoryEntry {
        &self.history[self.history.len() - 1]
    }

    /// Index of the displayed entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when the cursor sits before the latest entry.
    pub fn is_viewing_past(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    /// Running score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Plays the current player's mark at `position`.
    ///
    /// Entries after the cursor are discarded first, so playing from a past
    /// entry overwrites the old future. A move that finishes the game is
    /// recorded in the score.
    ///
    /// # Errors
    ///
    /// - [`GameError::IllegalMove`] if the board at the cursor is finished or
    ///   the cell is occupied.
    /// - [`GameError::InvariantViolation`] if the computed state is
    ///   inconsistent; the session is left unchanged.
    #[instrument(skip_all, fields(cursor = self.cursor, position = %position))]
    pub fn play_move(&mut self, position: Position) -> Result<Outcome, GameError> {
        let mark = self.current_player();
        let board = BoardEngine::apply_move(self.current(), position, mark).inspect_err(|e| {
            warn!(error = %e, "Illegal move");
        })?;

        let mut next = self.clone();
        let discarded = next.history.len() - (next.cursor + 1);
        if discarded > 0 {
            debug!(discarded, "Branching from past entry, discarding future");
        }
        next.history.truncate(next.cursor + 1);

        let move_number = next.cursor + 1;
        let last_move = Move::new(mark, position);
        next.history.push(HistoryEntry::after(move_number, board, last_move));
        next.cursor = move_number;

        let outcome = BoardEngine::evaluate(&board);
        next.score.record(outcome);

        next.verify()?;
        *self = next;

        info!(%mark, move_number, %outcome, "Move played");
        Ok(outcome)
    }

    /// Moves the cursor to `move_number` without changing history or score.
    ///
    /// # Errors
    ///
    /// [`GameError::OutOfRange`] if no such entry exists.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), GameError> {
        if move_number >= self.history.len() {
            warn!(len = self.history.len(), "Jump target out of range");
            return Err(GameError::OutOfRange {
                requested: move_number,
                len: self.history.len(),
            });
        }
        self.cursor = move_number;
        info!("Jumped to history entry");
        Ok(())
    }

    /// Starts a new game. The score is kept.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.history = vec![HistoryEntry::start()];
        self.cursor = 0;
        info!("Game reset");
    }

    /// Zeroes the score. History and cursor are kept.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.score = Score::new();
        info!("Scores reset");
    }

    /// Read model for the presentation layer.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from_session(self)
    }

    fn verify(&self) -> Result<(), GameError> {
        SessionInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Session invariant violated");
            GameError::InvariantViolation(descriptions)
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
