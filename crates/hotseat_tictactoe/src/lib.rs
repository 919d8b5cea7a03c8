//! Hotseat tic-tac-toe - the game state machine.
//!
//! Two players share one input device and alternately mark cells on a 3x3
//! grid. This crate holds everything with rules attached and nothing that
//! draws or polls.
//!
//! # Architecture
//!
//! - **BoardState**: the grid, move count, and status; validates and applies moves
//! - **Rules**: pure win/draw evaluation over a cell array
//! - **Contracts**: one precondition per move rule, composed by `LegalMove`
//! - **Invariants**: properties checked after every placement in debug builds
//! - **GameController**: maps input events onto the board and derives status text
//!
//! # Example
//!
//! ```
//! use hotseat_tictactoe::{GameController, InputEvent, StatusMessage, Player};
//!
//! let mut controller = GameController::new();
//! let message = controller.handle_event(InputEvent::CellSelected(4));
//! assert_eq!(message, StatusMessage::Turn(Player::Two));
//! assert_eq!(message.to_string(), "Player 2's Turn");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
pub mod contracts;
mod controller;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use board::{BoardState, InvalidBoard};
pub use controller::{GameController, InputEvent, StatusMessage};
pub use error::{IllegalMove, IllegalMoveReason};
pub use position::{CELL_COUNT, Position};
pub use rules::{LINES, Line};
pub use types::{Cell, Player, Status};
