//! Game rules for tic-tac-toe.
//!
//! Pure functions over a cell array. Rules are separated from board
//! storage so the board, the invariants, and the tests can all evaluate
//! the same grid the same way.

pub mod draw;
pub mod win;

pub use draw::{is_full, marks_placed};
pub use win::{LINES, Line, winner, winning_line};

use crate::{Cell, Status};
use crate::position::CELL_COUNT;
use tracing::instrument;

/// Derives the game status from the cells alone.
///
/// A completed line wins (first line in [`LINES`] order); otherwise a
/// full board is a draw; otherwise the game is still in progress.
#[instrument(skip(cells))]
pub fn evaluate(cells: &[Cell; CELL_COUNT]) -> Status {
    if let Some(player) = winner(cells) {
        Status::Won(player)
    } else if is_full(cells) {
        Status::Draw
    } else {
        Status::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    const O: Cell = Cell::Occupied(Player::One);
    const X: Cell = Cell::Occupied(Player::Two);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_evaluate_empty() {
        assert_eq!(evaluate(&[E; CELL_COUNT]), Status::InProgress);
    }

    #[test]
    fn test_evaluate_win_beats_full_board() {
        // Ninth mark completes a line: win, not draw.
        let cells = [O, X, O, X, O, X, X, O, O];
        assert_eq!(evaluate(&cells), Status::Won(Player::One));
    }

    #[test]
    fn test_evaluate_draw() {
        let cells = [O, X, O, X, X, O, O, O, X];
        assert_eq!(evaluate(&cells), Status::Draw);
    }
}
