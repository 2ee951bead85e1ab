//! Tic-tac-toe engine with a time-travelling session.
//!
//! # Architecture
//!
//! - **BoardEngine**: pure functions over a 3x3 board (apply a move,
//!   evaluate the outcome). Holds no state.
//! - **GameSession**: owns the move history of the current game, a cursor
//!   into it and the running score across games.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameSession, Mark, Outcome, Position};
//!
//! let mut session = GameSession::new();
//! for pos in [
//!     Position::TopLeft,
//!     Position::TopCenter,
//!     Position::Center,
//!     Position::TopRight,
//! ] {
//!     session.play_move(pos)?;
//! }
//! assert_eq!(session.play_move(Position::BottomRight)?, Outcome::Win(Mark::X));
//! assert_eq!(session.score().x(), 1);
//!
//! // Time travel, then branch: the old future is discarded.
//! session.jump_to(0)?;
//! session.play_move(Position::Center)?;
//! assert_eq!(session.history().len(), 2);
//! # Ok::<(), tictactoe_engine::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod history;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod score;
mod session;
mod snapshot;
mod types;

pub use engine::BoardEngine;
pub use error::{GameError, MoveError};
pub use history::{HistoryEntry, Move};
pub use outcome::Outcome;
pub use position::Position;
pub use score::Score;
pub use session::GameSession;
pub use snapshot::SessionSnapshot;
pub use types::{Board, Cell, Mark};
