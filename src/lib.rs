//! Terminal tic-tac-toe with move history, time travel and a scoreboard.
//!
//! This crate is the presentation layer over [`tictactoe_engine`]. It owns
//! one [`tictactoe_engine::GameSession`] and turns key presses or scripted
//! steps into session calls.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for logging and panel visibility
//! - **Tui**: ratatui front end (board, scoreboard, history jump list)
//! - **Replay**: headless script runner that prints a JSON snapshot
//!
//! # Example
//!
//! ```
//! use tictactoe_tui::{ReplayStep, run_script};
//!
//! let steps = ["0", "1", "4", "2", "8"]
//!     .iter()
//!     .map(|s| s.parse::<ReplayStep>())
//!     .collect::<Result<Vec<_>, _>>()?;
//! let report = run_script(&steps);
//! assert_eq!(report.session.score.x(), 1);
//! # Ok::<(), tictactoe_tui::ReplayStepError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod logging;
mod replay;
mod tui;

pub use config::{AppConfig, ConfigError};
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{RejectedStep, ReplayReport, ReplayStep, ReplayStepError, run_script};
pub use tui::{Action, App, Direction, action_for, draw, move_cursor, run_tui};
