//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use tictactoe_engine::Position;

/// Direction of a cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor.
    MoveCursor(Direction),
    /// Play at the board cursor.
    PlayCursor,
    /// Play directly at a position (keys 1-9).
    PlayAt(Position),
    /// Show the previous history entry.
    StepBack,
    /// Show the next history entry.
    StepForward,
    /// Show the game start.
    JumpStart,
    /// Show the latest entry.
    JumpLatest,
    /// Start a new game.
    NewGame,
    /// Zero the scoreboard.
    ResetScores,
    /// Leave the app.
    Quit,
}

/// Maps a key to an action, `None` for unbound keys.
pub fn action_for(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::Up => Action::MoveCursor(Direction::Up),
        KeyCode::Down => Action::MoveCursor(Direction::Down),
        KeyCode::Left => Action::MoveCursor(Direction::Left),
        KeyCode::Right => Action::MoveCursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlayCursor,
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Action::PlayAt(Position::from_index(index)?)
        }
        KeyCode::Char('[') => Action::StepBack,
        KeyCode::Char(']') => Action::StepForward,
        KeyCode::Home => Action::JumpStart,
        KeyCode::End => Action::JumpLatest,
        KeyCode::Char('n') | KeyCode::Char('r') => Action::NewGame,
        KeyCode::Char('s') => Action::ResetScores,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Moves the cursor one cell, staying put at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match direction {
        Direction::Up => row.checked_sub(1).and_then(|r| Position::at(r, col)),
        Direction::Down => Position::at(row + 1, col),
        Direction::Left => col.checked_sub(1).and_then(|c| Position::at(row, c)),
        Direction::Right => Position::at(row, col + 1),
    };
    target.unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, Direction::Right), Position::MiddleRight);
    }

    #[test]
    fn test_digit_keys_are_one_based() {
        assert_eq!(action_for(KeyCode::Char('1')), Some(Action::PlayAt(Position::TopLeft)));
        assert_eq!(action_for(KeyCode::Char('9')), Some(Action::PlayAt(Position::BottomRight)));
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(action_for(KeyCode::Char('x')), None);
        assert_eq!(action_for(KeyCode::Esc), Some(Action::Quit));
    }
}
