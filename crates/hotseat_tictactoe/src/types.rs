//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player 1 (goes first).
    One,
    /// Player 2 (goes second).
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the player who makes the zero-based move `move_number`.
    ///
    /// Even moves belong to Player 1, odd moves to Player 2.
    pub fn for_move(move_number: usize) -> Self {
        if move_number % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Returns the player's number as shown to humans (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl Status {
    /// Returns true once the game is won or drawn.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::InProgress => write!(f, "In progress"),
            Status::Won(player) => write!(f, "{} wins", player),
            Status::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_move_alternates() {
        assert_eq!(Player::for_move(0), Player::One);
        assert_eq!(Player::for_move(1), Player::Two);
        assert_eq!(Player::for_move(8), Player::One);
    }

    #[test]
    fn test_opponent_round_trip() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent().opponent(), Player::Two);
    }

    #[test]
    fn test_status_terminal() {
        assert!(!Status::InProgress.is_terminal());
        assert!(Status::Won(Player::Two).is_terminal());
        assert!(Status::Draw.is_terminal());
    }
}
