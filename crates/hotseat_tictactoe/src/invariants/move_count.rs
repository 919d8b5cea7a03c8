//! Move count invariant: the counter matches the marks on the board.

use super::Invariant;
use crate::BoardState;
use crate::rules::marks_placed;

/// Invariant: `move_count` equals the number of occupied cells.
///
/// No placement is counted without a mark, and no mark appears without
/// a counted placement.
pub struct MoveCountInvariant;

impl Invariant<BoardState> for MoveCountInvariant {
    fn holds(board: &BoardState) -> bool {
        marks_placed(&board.cells()) == board.move_count()
    }

    fn description() -> &'static str {
        "Move count matches number of occupied cells"
    }
}
