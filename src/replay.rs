//! Headless replay of a scripted sequence of session operations.

use derive_more::{Display, Error};
use serde::Serialize;
use std::str::FromStr;
use tictactoe_engine::{GameError, GameSession, Position, SessionSnapshot};
use tracing::{debug, info, instrument, warn};

/// One scripted operation.
///
/// Text forms: `0`-`8` plays at that index, `jump:N` jumps to move `N`,
/// `new` resets the game, `reset-scores` zeroes the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayStep {
    /// Play the current mark at a position.
    Play(Position),
    /// Move the history cursor.
    Jump(usize),
    /// Start a new game.
    NewGame,
    /// Zero the scoreboard.
    ResetScores,
}

impl ReplayStep {
    /// Applies this step to `session`.
    pub fn apply(self, session: &mut GameSession) -> Result<(), GameError> {
        match self {
            ReplayStep::Play(position) => session.play_move(position).map(|_| ()),
            ReplayStep::Jump(move_number) => session.jump_to(move_number),
            ReplayStep::NewGame => {
                session.reset_game();
                Ok(())
            }
            ReplayStep::ResetScores => {
                session.reset_scores();
                Ok(())
            }
        }
    }
}

impl std::fmt::Display for ReplayStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplayStep::Play(position) => write!(f, "{}", position.to_index()),
            ReplayStep::Jump(n) => write!(f, "jump:{}", n),
            ReplayStep::NewGame => write!(f, "new"),
            ReplayStep::ResetScores => write!(f, "reset-scores"),
        }
    }
}

/// A step that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid replay step '{}': expected 0-8, jump:N, new or reset-scores", input)]
pub struct ReplayStepError {
    /// Offending text.
    pub input: String,
}

impl FromStr for ReplayStep {
    type Err = ReplayStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ReplayStepError {
            input: s.to_string(),
        };

        match s {
            "new" => Ok(ReplayStep::NewGame),
            "reset-scores" => Ok(ReplayStep::ResetScores),
            _ => {
                if let Some(n) = s.strip_prefix("jump:") {
                    parse_digits(n).map(ReplayStep::Jump).ok_or_else(invalid)
                } else {
                    let index = parse_digits(s).ok_or_else(invalid)?;
                    Position::try_from(index)
                        .map(ReplayStep::Play)
                        .map_err(|_| invalid())
                }
            }
        }
    }
}

/// Parses a plain decimal number: no sign, no leading zeros.
fn parse_digits(s: &str) -> Option<usize> {
    let padded = s.len() > 1 && s.starts_with('0');
    if s.is_empty() || padded || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// A step the session refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedStep {
    /// Zero-based position of the step in the script.
    pub index: usize,
    /// The step as written.
    pub step: String,
    /// Why the session refused it.
    pub reason: String,
}

/// Result of running a script.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Steps the session accepted.
    pub applied: usize,
    /// Steps the session refused, in script order.
    pub rejected: Vec<RejectedStep>,
    /// Final session state.
    pub session: SessionSnapshot,
}

/// Runs `steps` against a fresh session.
///
/// Refused steps are collected and skipped, the way the interactive client
/// ignores stale input.
#[instrument(skip_all, fields(steps = steps.len()))]
pub fn run_script(steps: &[ReplayStep]) -> ReplayReport {
    let mut session = GameSession::new();
    let mut applied = 0;
    let mut rejected = Vec::new();

    for (index, step) in steps.iter().enumerate() {
        match step.apply(&mut session) {
            Ok(()) => {
                debug!(index, %step, "Applied step");
                applied += 1;
            }
            Err(e) => {
                warn!(index, %step, error = %e, "Step rejected");
                rejected.push(RejectedStep {
                    index,
                    step: step.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(applied, rejected = rejected.len(), "Replay finished");
    ReplayReport {
        applied,
        rejected,
        session: session.snapshot(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{Mark, Outcome};

    fn parse(steps: &[&str]) -> Vec<ReplayStep> {
        steps.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_parse_grammar() {
        assert_eq!("4".parse(), Ok(ReplayStep::Play(Position::Center)));
        assert_eq!("jump:3".parse(), Ok(ReplayStep::Jump(3)));
        assert_eq!("new".parse(), Ok(ReplayStep::NewGame));
        assert_eq!(" reset-scores ".parse(), Ok(ReplayStep::ResetScores));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["9", "-1", "jump:", "jump:x", "undo", ""] {
            assert!(bad.parse::<ReplayStep>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_parse_rejects_signed_and_padded_numbers() {
        for bad in ["+4", "04", "jump:+3", "jump:03", "jump:-1"] {
            assert!(bad.parse::<ReplayStep>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_display_matches_parse() {
        for text in ["8", "jump:12", "new", "reset-scores"] {
            let step: ReplayStep = text.parse().unwrap();
            assert_eq!(step.to_string(), text);
        }
    }

    #[test]
    fn test_script_scores_and_collects_rejections() {
        let report = run_script(&parse(&["0", "1", "4", "4", "2", "8", "3", "jump:9"]));

        assert_eq!(report.applied, 5);
        let indices: Vec<_> = report.rejected.iter().map(|r| r.index).collect();
        assert_eq!(indices, [3, 6, 7]);
        assert_eq!(report.session.outcome, Outcome::Win(Mark::X));
        assert_eq!(report.session.score.x(), 1);
    }

    #[test]
    fn test_script_new_game_keeps_score() {
        let report = run_script(&parse(&["0", "1", "4", "2", "8", "new", "4"]));
        assert!(report.rejected.is_empty());
        assert_eq!(report.session.score.x(), 1);
        assert_eq!(report.session.history.len(), 2);
        assert_eq!(report.session.current_player, Mark::O);
    }
}
