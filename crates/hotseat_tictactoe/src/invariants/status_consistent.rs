//! Status consistency invariant: tracked status equals a fresh evaluation.

use super::Invariant;
use crate::BoardState;

/// Invariant: The incrementally tracked status equals `evaluate()`.
pub struct StatusConsistentInvariant;

impl Invariant<BoardState> for StatusConsistentInvariant {
    fn holds(board: &BoardState) -> bool {
        board.status() == board.evaluate()
    }

    fn description() -> &'static str {
        "Tracked status matches status evaluated from cells"
    }
}
