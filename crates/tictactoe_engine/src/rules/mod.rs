//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board according to tic-tac-toe rules. Rules
//! are kept apart from board storage so the engine and the session invariants
//! share a single win detector.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};
