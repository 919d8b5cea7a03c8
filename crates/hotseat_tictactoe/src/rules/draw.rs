//! Draw detection logic for tic-tac-toe.

use crate::Cell;
use crate::position::CELL_COUNT;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(cells: &[Cell; CELL_COUNT]) -> bool {
    cells.iter().all(|cell| !cell.is_empty())
}

/// Counts the occupied cells.
pub fn marks_placed(cells: &[Cell; CELL_COUNT]) -> usize {
    cells.iter().filter(|cell| !cell.is_empty()).count()
}
