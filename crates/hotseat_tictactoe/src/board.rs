//! Board state machine for tic-tac-toe.
//!
//! `BoardState` owns the grid and the game status. The only way to change
//! the grid is [`BoardState::place`], which validates every rule before
//! writing, so a rejected move never leaves the board half-updated.

use crate::contracts::LegalMove;
use crate::error::IllegalMove;
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::position::CELL_COUNT;
use crate::rules::{self, LINES, Line};
use crate::{Cell, Player, Position, Status};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// 3x3 tic-tac-toe board with its lifecycle status.
///
/// Serializes as its nine cells. Deserializing goes through
/// `TryFrom<[Cell; CELL_COUNT]>`, which rebuilds the move count and status
/// from the cells and rejects grids that alternating play cannot reach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[Cell; CELL_COUNT]", into = "[Cell; CELL_COUNT]")]
pub struct BoardState {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
    /// Number of marks placed; equals the occupied cell count.
    move_count: usize,
    /// Game status, recomputed after every placement.
    status: Status,
}

impl BoardState {
    /// Creates a fresh board: all cells empty, Player 1 to move.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
            move_count: 0,
            status: Status::InProgress,
        }
    }

    /// Returns a copy of all cells, for rendering.
    pub fn cells(&self) -> [Cell; CELL_COUNT] {
        self.cells
    }

    /// Gets the cell at the given position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Number of marks placed since the last reset.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the game status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the player whose turn it is.
    ///
    /// Derived from the move count. Once the game is over the turn does not
    /// advance, so this is the player who made the final move.
    pub fn current_player(&self) -> Player {
        match self.status {
            Status::InProgress => Player::for_move(self.move_count),
            Status::Won(_) | Status::Draw => Player::for_move(self.move_count.saturating_sub(1)),
        }
    }

    /// Returns the completed line, if the game has been won.
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(&self.cells).map(|(line, _)| line)
    }

    /// Places `player`'s mark at `index` and returns the resulting status.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] if the index is out of range, the game is
    /// over, it is not `player`'s turn, or the cell is occupied. The board
    /// is unchanged in every error case.
    #[instrument(skip(self), fields(move_count = self.move_count))]
    pub fn place(&mut self, index: usize, player: Player) -> Result<Status, IllegalMove> {
        let pos = LegalMove::check(index, player, self).map_err(|reason| {
            debug!(%reason, "Move rejected");
            IllegalMove::new(reason)
        })?;

        self.cells[pos.to_index()] = Cell::Occupied(player);
        self.move_count += 1;
        self.status = self.evaluate();

        debug_assert!(
            BoardInvariants::check_all(self).is_ok(),
            "Board invariants violated after placing at {}",
            pos
        );

        match self.status {
            Status::InProgress => debug!(position = %pos, %player, "Mark placed"),
            status => info!(position = %pos, %player, %status, "Game over"),
        }

        Ok(self.status)
    }

    /// Resets the board to its fresh state.
    #[instrument(skip(self), fields(move_count = self.move_count, status = %self.status))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Board reset");
    }

    /// Recomputes the status from the cells alone, without side effects.
    pub fn evaluate(&self) -> Status {
        rules::evaluate(&self.cells)
    }

    /// Overwrites a cell without any checks, bypassing `place`.
    #[cfg(test)]
    pub(crate) fn corrupt_cell(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Why a cell snapshot cannot be restored as a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidBoard {
    /// Player 1 must hold as many marks as Player 2, or one more.
    #[display("Player 1 has {} marks and Player 2 has {}; turns must alternate", ones, twos)]
    UnbalancedMarks {
        /// Marks held by Player 1.
        ones: usize,
        /// Marks held by Player 2.
        twos: usize,
    },

    /// Both players have a completed line.
    #[display("Both players have a completed line")]
    TwoWinners,

    /// The winner's line would have ended the game before the last mark.
    #[display("{} won but did not make the last move", winner)]
    WinnerDidNotMoveLast {
        /// Owner of the completed line.
        winner: Player,
    },
}

impl TryFrom<[Cell; CELL_COUNT]> for BoardState {
    type Error = InvalidBoard;

    /// Restores a board from its cells, as if the marks had been placed in turn.
    #[instrument(skip_all)]
    fn try_from(cells: [Cell; CELL_COUNT]) -> Result<Self, Self::Error> {
        let count = |player| {
            cells
                .iter()
                .filter(|cell| **cell == Cell::Occupied(player))
                .count()
        };
        let ones = count(Player::One);
        let twos = count(Player::Two);
        if ones != twos && ones != twos + 1 {
            return Err(InvalidBoard::UnbalancedMarks { ones, twos });
        }

        let completes_line = |player| {
            LINES
                .iter()
                .any(|line| line.iter().all(|pos| cells[pos.to_index()] == Cell::Occupied(player)))
        };
        if completes_line(Player::One) && completes_line(Player::Two) {
            return Err(InvalidBoard::TwoWinners);
        }

        let move_count = rules::marks_placed(&cells);
        let status = rules::evaluate(&cells);
        if let Status::Won(winner) = status
            && winner != Player::for_move(move_count - 1)
        {
            return Err(InvalidBoard::WinnerDidNotMoveLast { winner });
        }

        debug!(move_count, %status, "Board restored from cells");
        Ok(Self {
            cells,
            move_count,
            status,
        })
    }
}

impl From<BoardState> for [Cell; CELL_COUNT] {
    fn from(board: BoardState) -> Self {
        board.cells
    }
}
