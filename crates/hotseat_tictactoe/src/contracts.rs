//! Preconditions for placing a mark.
//!
//! Each precondition checks one rule and names the violation. `LegalMove`
//! composes them in the order the board reports failures: range, game
//! over, turn, then occupancy.

use crate::error::IllegalMoveReason;
use crate::{BoardState, Player, Position};
use tracing::instrument;

/// Precondition: The index must name a cell.
pub struct IndexInRange;

impl IndexInRange {
    /// Resolves the index to a position.
    #[instrument]
    pub fn check(index: usize) -> Result<Position, IllegalMoveReason> {
        Position::from_index(index).ok_or(IllegalMoveReason::OutOfRange(index))
    }
}

/// Precondition: The game must not be won or drawn.
pub struct GameLive;

impl GameLive {
    /// Fails with `GameOver` on a terminal board.
    #[instrument(skip(board))]
    pub fn check(board: &BoardState) -> Result<(), IllegalMoveReason> {
        if board.status().is_terminal() {
            Err(IllegalMoveReason::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with `WrongPlayer` if `player` is not the one to move.
    #[instrument(skip(board))]
    pub fn check(player: Player, board: &BoardState) -> Result<(), IllegalMoveReason> {
        if player != board.current_player() {
            Err(IllegalMoveReason::WrongPlayer(player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The cell at the position must be empty.
pub struct CellEmpty;

impl CellEmpty {
    /// Fails with `Occupied` if the cell already holds a mark.
    #[instrument(skip(board))]
    pub fn check(pos: Position, board: &BoardState) -> Result<(), IllegalMoveReason> {
        if board.cell(pos).is_empty() {
            Ok(())
        } else {
            Err(IllegalMoveReason::Occupied(pos))
        }
    }
}

/// Composite precondition: every rule above must hold.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move and returns the target position.
    #[instrument(skip(board))]
    pub fn check(
        index: usize,
        player: Player,
        board: &BoardState,
    ) -> Result<Position, IllegalMoveReason> {
        let pos = IndexInRange::check(index)?;
        GameLive::check(board)?;
        PlayersTurn::check(player, board)?;
        CellEmpty::check(pos, board)?;
        Ok(pos)
    }
}
