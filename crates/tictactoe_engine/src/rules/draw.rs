//! Full-board detection for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (all cells marked).
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::super::super::{Cell, Mark};
    use super::*;
    use crate::rules::check_winner;

    const X: Cell = Cell::Marked(Mark::X);
    const O: Cell = Cell::Marked(Mark::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::from_cells([E, E, E, E, X, E, E, E, E]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert!(is_full(&board));
        assert!(check_winner(&board).is_none());
    }

    #[test]
    fn test_full_board_can_still_have_winner() {
        // X X X / O O X / O X O
        let board = Board::from_cells([X, X, X, O, O, X, O, X, O]);
        assert!(is_full(&board));
        assert!(check_winner(&board).is_some());
    }
}
