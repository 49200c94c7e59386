//! First-class move records and the errors that reject them.
//!
//! Moves are domain events, not side effects: once accepted into the
//! log they are never mutated or removed, and the whole game state is
//! re-derived from them on every read.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a position.
///
/// Moves can be validated before application, serialized for replay,
/// and logged for debugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The position where the player places their mark.
    pub position: Position,
    /// The player making the move.
    pub player: Player,
}

impl Move {
    /// Creates a new move.
    pub fn new(position: Position, player: Player) -> Self {
        Self { position, player }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square at {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The position lies outside the board.
    #[display("Position {} is outside a board of size {}", position, size)]
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Side length of the board it was applied to.
        size: usize,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mv = Move::new(Position::new(2, 0), Player::O);
        assert_eq!(mv.to_string(), "O -> (2, 0)");
    }

    #[test]
    fn test_error_messages() {
        let occupied = MoveError::SquareOccupied(Position::new(1, 1));
        assert_eq!(occupied.to_string(), "Square at (1, 1) is already occupied");

        let oob = MoveError::OutOfBounds {
            position: Position::new(4, 0),
            size: 3,
        };
        assert_eq!(
            oob.to_string(),
            "Position (4, 0) is outside a board of size 3"
        );

        assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
    }
}
