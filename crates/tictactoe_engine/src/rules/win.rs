//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position};
use tracing::instrument;

/// The eight winning lines, scanned in this order.
///
/// Rows first, then columns, then the two diagonals. The order only matters
/// for boards where more than one line is complete, which legal play never
/// produces.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and the mark that owns it.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board) -> Option<(Mark, [Position; 3])> {
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let mark = board.get(a).mark()?;
        (board.get(b).mark() == Some(mark) && board.get(c).mark() == Some(mark))
            .then_some((mark, line))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first line of three equal marks,
/// `None` otherwise.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}
