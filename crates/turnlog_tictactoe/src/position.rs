//! Board coordinates for tic-tac-toe moves.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board: row and column, each in `[0, size)`.
///
/// Positions carry no board size of their own; bounds are checked
/// against the size of the board they are applied to, so the same
/// type serves any square board of side 3 or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Position {
    /// Creates a position from row and column indices.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true if both coordinates lie in `[0, size)`.
    pub fn in_bounds(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Row-major index into a board of the given side length.
    pub(crate) fn index(&self, size: usize) -> usize {
        self.row * size + self.col
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
