//! Alternating marks invariant: Player 1 leads by at most one mark.

use super::Invariant;
use crate::{BoardState, Cell, Player};

/// Invariant: Players alternate turns, Player 1 first.
///
/// Player 1 holds either as many marks as Player 2 or exactly one more.
pub struct AlternatingMarksInvariant;

impl Invariant<BoardState> for AlternatingMarksInvariant {
    fn holds(board: &BoardState) -> bool {
        let cells = board.cells();
        let count = |player| {
            cells
                .iter()
                .filter(|cell| **cell == Cell::Occupied(player))
                .count()
        };
        let ones = count(Player::One);
        let twos = count(Player::Two);

        ones == twos || ones == twos + 1
    }

    fn description() -> &'static str {
        "Players alternate turns (1, 2, 1, 2, ...)"
    }
}
