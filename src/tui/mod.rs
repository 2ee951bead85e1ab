//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, Direction, action_for, move_cursor};
pub use ui::draw;

use crate::config::AppConfig;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
///
/// The terminal is restored even when the loop fails.
#[instrument(skip_all)]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let guard = TerminalGuard { armed: true };
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_loop(&mut terminal, &mut app);
    let restored = guard.restore();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    info!(
        x = app.session().score().x(),
        o = app.session().score().o(),
        draws = app.session().score().draws(),
        "TUI closed"
    );
    res.and(restored.map_err(Into::into))
}

/// Puts the terminal back into cooked mode when dropped.
///
/// Armed as soon as raw mode is on.
struct TerminalGuard {
    armed: bool,
}

impl TerminalGuard {
    /// Restores now and reports the first failure.
    fn restore(mut self) -> io::Result<()> {
        self.armed = false;
        restore_terminal(&mut io::stdout(), true)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.armed {
            let _ = restore_terminal(&mut io::stdout(), true);
        }
    }
}

/// Runs every teardown step, even after one fails, and returns the first error.
fn restore_terminal<W: Write>(out: &mut W, raw_mode: bool) -> io::Result<()> {
    let raw = if raw_mode { disable_raw_mode() } else { Ok(()) };
    let screen = execute!(out, LeaveAlternateScreen);
    let cursor = execute!(out, Show);
    raw.and(screen).and(cursor)
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| draw(f, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = action_for(key.code)
        {
            app.handle_action(action);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_leaves_alternate_screen_and_shows_cursor() {
        let mut out = Vec::new();
        restore_terminal(&mut out, false).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }

    struct FailingWriter {
        writes: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            Err(io::Error::other("closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_restore_attempts_every_step_after_a_failure() {
        let mut out = FailingWriter { writes: 0 };
        assert!(restore_terminal(&mut out, false).is_err());
        assert_eq!(out.writes, 2);
    }
}
