//! Win detection logic for tic-tac-toe.

use crate::position::CELL_COUNT;
use crate::{Cell, Player, Position};
use tracing::instrument;

/// Three cell positions that win when held by one player.
pub type Line = [Position; 3];

/// The eight winning lines, in evaluation order.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and the player holding it.
#[instrument(skip(cells))]
pub fn winning_line(cells: &[Cell; CELL_COUNT]) -> Option<(Line, Player)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.map(|pos| cells[pos.to_index()]);
        match a {
            Cell::Occupied(player) if a == b && a == c => Some((line, player)),
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn winner(cells: &[Cell; CELL_COUNT]) -> Option<Player> {
    winning_line(cells).map(|(_, player)| player)
}
