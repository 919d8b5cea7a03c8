//! Input-to-action mapping for the game.
//!
//! The controller is the only owner of the [`BoardState`]. Front ends feed
//! it discrete [`InputEvent`]s and read back a [`StatusMessage`] and a cell
//! snapshot to render.

use crate::position::CELL_COUNT;
use crate::rules::Line;
use crate::{BoardState, Cell, Player, Status};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A discrete input the front end hands to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// A player selected the cell at this index (0-8).
    CellSelected(usize),
    /// A player asked for a new game.
    ResetRequested,
}

/// Human-readable summary of whose turn it is or how the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum StatusMessage {
    /// The given player is to move.
    #[display("Player {}'s Turn", _0.number())]
    Turn(Player),
    /// The given player completed a line.
    #[display("PLAYER {} WINS!", _0.number())]
    Won(Player),
    /// The board filled with no line completed.
    #[display("TIE!")]
    Tie,
}

impl StatusMessage {
    /// Derives the message for a board.
    ///
    /// A finished game names the player who just moved; a live game names
    /// the player to move next.
    pub fn for_board(board: &BoardState) -> Self {
        match board.status() {
            Status::InProgress => StatusMessage::Turn(board.current_player()),
            Status::Won(winner) => StatusMessage::Won(winner),
            Status::Draw => StatusMessage::Tie,
        }
    }
}

/// Applies input events to the board under the game rules.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    board: BoardState,
}

impl GameController {
    /// Creates a controller with a fresh board.
    #[instrument]
    pub fn new() -> Self {
        info!("Starting new game");
        Self {
            board: BoardState::new(),
        }
    }

    /// Dispatches one input event and returns the resulting message.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: InputEvent) -> StatusMessage {
        match event {
            InputEvent::CellSelected(index) => self.on_cell_selected(index),
            InputEvent::ResetRequested => self.on_reset_requested(),
        }
    }

    /// Places the current player's mark at `index`.
    ///
    /// Illegal selections (occupied cell, out-of-range index, finished game)
    /// are ignored: the board and message stay as they were.
    #[instrument(skip(self), fields(player = %self.board.current_player()))]
    pub fn on_cell_selected(&mut self, index: usize) -> StatusMessage {
        let player = self.board.current_player();
        if let Err(err) = self.board.place(index, player) {
            debug!(error = %err, "Ignoring cell selection");
        }
        self.status_message()
    }

    /// Starts a new game.
    #[instrument(skip(self))]
    pub fn on_reset_requested(&mut self) -> StatusMessage {
        self.board.reset();
        self.status_message()
    }

    /// Returns the message for the current board.
    pub fn status_message(&self) -> StatusMessage {
        StatusMessage::for_board(&self.board)
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Snapshot of the cells, for rendering.
    pub fn cells(&self) -> [Cell; CELL_COUNT] {
        self.board.cells()
    }

    /// Completed line to highlight, if any.
    pub fn winning_line(&self) -> Option<Line> {
        self.board.winning_line()
    }
}
