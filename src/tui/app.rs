//! Application state and logic.

use super::input::{Action, move_cursor};
use crate::config::AppConfig;
use tictactoe_engine::{GameError, GameSession, MoveError, Outcome, Position};
use tracing::debug;

/// Main application state.
///
/// Holds the one [`GameSession`] and translates actions into session calls.
/// Legality is always left to the session.
pub struct App {
    session: GameSession,
    cursor: Position,
    status_message: String,
    show_history: bool,
    show_help: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            session: GameSession::new(),
            cursor: Position::Center,
            status_message: "Player X starts.".to_string(),
            show_history: *config.show_history(),
            show_help: *config.show_help(),
            should_quit: false,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the history panel is drawn.
    pub fn show_history(&self) -> bool {
        self.show_history
    }

    /// Whether the key help is drawn.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one user action.
    pub fn handle_action(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::PlayCursor => self.play(self.cursor),
            Action::PlayAt(position) => {
                self.cursor = position;
                self.play(position);
            }
            Action::StepBack => {
                if let Some(target) = self.session.cursor().checked_sub(1) {
                    self.jump(target);
                }
            }
            Action::StepForward => self.jump(self.session.cursor() + 1),
            Action::JumpStart => self.jump(0),
            Action::JumpLatest => self.jump(self.session.latest().move_number()),
            Action::NewGame => {
                self.session.reset_game();
                self.status_message = "New game. Player X starts.".to_string();
            }
            Action::ResetScores => {
                self.session.reset_scores();
                self.status_message = "Scores cleared.".to_string();
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn play(&mut self, position: Position) {
        let mark = self.session.current_player();
        match self.session.play_move(position) {
            Ok(Outcome::InProgress) => {
                self.status_message = format!("{} played {}.", mark, position.label());
            }
            Ok(outcome) => {
                self.status_message = format!("{}! Press 'n' for a new game.", outcome);
            }
            Err(e) => self.reject(e),
        }
    }

    fn jump(&mut self, move_number: usize) {
        match self.session.jump_to(move_number) {
            Ok(()) => {
                self.status_message = self.session.current_entry().description();
            }
            Err(e) => self.reject(e),
        }
    }

    /// Stale or illegal input is dropped; the status line only notes it.
    fn reject(&mut self, error: GameError) {
        debug!(error = %error, "Input ignored");
        self.status_message = match error {
            GameError::IllegalMove(MoveError::SquareOccupied(_)) => "That cell is taken.".to_string(),
            GameError::IllegalMove(MoveError::GameOver(_)) => {
                "This game is over. Press 'n' for a new game.".to_string()
            }
            GameError::OutOfRange { .. } => "No more history in that direction.".to_string(),
            other => other.to_string(),
        };
    }
}
