//! Move rejection errors.

use crate::{Player, Position};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMoveReason {
    /// The index does not name a cell (must be 0-8).
    #[display("Index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// The cell at the position is already occupied.
    #[display("{} is already occupied", _0)]
    Occupied(Position),

    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,
}

/// A move that the board refused to apply.
///
/// This is the only error the core produces. The board is never mutated
/// when it is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Illegal move: {}", reason)]
pub struct IllegalMove {
    reason: IllegalMoveReason,
}

impl IllegalMove {
    /// Creates an illegal move error for the given reason.
    pub fn new(reason: IllegalMoveReason) -> Self {
        Self { reason }
    }

    /// Returns why the move was rejected.
    pub fn reason(&self) -> IllegalMoveReason {
        self.reason
    }
}

impl From<IllegalMoveReason> for IllegalMove {
    fn from(reason: IllegalMoveReason) -> Self {
        Self::new(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_reason() {
        let err = IllegalMove::new(IllegalMoveReason::Occupied(Position::Center));
        assert_eq!(err.to_string(), "Illegal move: Center is already occupied");

        let err: IllegalMove = IllegalMoveReason::OutOfRange(12).into();
        assert_eq!(err.reason(), IllegalMoveReason::OutOfRange(12));
    }
}
