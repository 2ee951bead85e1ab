//! Running tally across completed games.

use super::outcome::Outcome;
use super::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Wins per mark and draws, accumulated until explicitly reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    x: u32,
    o: u32,
    draws: u32,
}

impl Score {
    /// A zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Games won by X.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Games won by O.
    pub fn o(&self) -> u32 {
        self.o
    }

    /// Drawn games.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Total finished games counted.
    pub fn games(&self) -> u32 {
        self.x + self.o + self.draws
    }

    /// Counts a finished outcome. `InProgress` is ignored.
    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Mark::X) => self.x += 1,
            Outcome::Win(Mark::O) => self.o += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => return,
        }
        debug!(x = self.x, o = self.o, draws = self.draws, "Score updated");
    }
}
