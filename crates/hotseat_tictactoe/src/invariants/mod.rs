//! First-class invariants for the board.
//!
//! Invariants are logical properties that must hold after every placement.
//! They are checked in debug builds and can be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of two and three invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_marks;
pub mod move_count;
pub mod status_consistent;

pub use alternating_marks::AlternatingMarksInvariant;
pub use move_count::MoveCountInvariant;
pub use status_consistent::StatusConsistentInvariant;

/// All board invariants as a composable set.
pub type BoardInvariants = (
    MoveCountInvariant,
    AlternatingMarksInvariant,
    StatusConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardState, Player};

    #[test]
    fn test_invariant_set_holds_for_empty_board() {
        assert!(BoardInvariants::check_all(&BoardState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut board = BoardState::new();
        for index in [0, 4, 2] {
            let player = board.current_player();
            board.place(index, player).expect("legal");
        }
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let mut board = BoardState::new();
        board.place(8, Player::One).expect("legal");

        type TwoInvariants = (MoveCountInvariant, AlternatingMarksInvariant);
        assert!(TwoInvariants::check_all(&board).is_ok());
    }
}
