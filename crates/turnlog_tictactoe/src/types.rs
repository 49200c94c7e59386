//! Core domain types for the derived-state tic-tac-toe engine.

use crate::action::MoveError;
use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Player mark in the game.
///
/// Exactly two marks exist and they alternate strictly; X always moves
/// first. Turn resolution and the win scan both assume this, so the
/// engine does not generalize to more players.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// A square board snapshot of side `size`.
///
/// Boards are disposable views derived from the move log, never stored
/// session state. Every projection allocates a fresh grid, so a snapshot
/// held by a caller stays valid after the log grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Side length.
    size: usize,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates a new empty board of the given side length.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the square at the given position, or `None` out of bounds.
    pub fn get(&self, pos: Position) -> Option<Square> {
        if !pos.in_bounds(self.size) {
            return None;
        }
        Some(self.squares[pos.index(self.size)])
    }

    /// Sets the square at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if the position lies outside
    /// the board.
    pub fn set(&mut self, pos: Position, square: Square) -> Result<(), MoveError> {
        if !pos.in_bounds(self.size) {
            return Err(MoveError::OutOfBounds {
                position: pos,
                size: self.size,
            });
        }
        self.squares[pos.index(self.size)] = square;
        Ok(())
    }

    /// Checks if the square at the given position is empty.
    ///
    /// Out-of-bounds positions are not empty (there is no square there).
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of occupied squares.
    pub fn mark_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns all squares as a row-major slice.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = match self.squares[row * self.size + col] {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < self.size - 1 {
                    result.push('|');
                }
            }
            if row < self.size - 1 {
                result.push('\n');
            }
        }
        result
    }
}

/// Outcome of the game as derived from the current board and move count.
///
/// `Won` carries both the winning mark and the display name the player
/// registry held at derivation time, so presentation code can render a
/// banner without a second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// The winning mark.
        player: Player,
        /// Display name of the winner.
        name: String,
    },
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns true if the game is still being played.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Outcome::InProgress)
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won { player, .. } => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Won { player, name } => write!(f, "{} ({}) wins", name, player),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}
