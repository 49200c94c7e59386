//! Board projection: folding the move log into a snapshot.

use crate::action::{Move, MoveError};
use crate::types::{Board, Square};
use tracing::instrument;

/// Projects a move log onto a fresh board of the given side length.
///
/// The log is ordered most-recent-first, so replay iterates it in
/// reverse to apply moves chronologically. On a valid log coordinates
/// are pairwise disjoint and replay order is irrelevant; on a corrupted
/// log with duplicate coordinates the chronologically-last write wins.
///
/// Every call allocates an independent board, so snapshots held by the
/// caller remain valid after the log grows.
///
/// # Errors
///
/// Returns [`MoveError::OutOfBounds`] if any logged position lies
/// outside the board. The offending move is reported, never skipped.
#[instrument(skip(turns), fields(moves = turns.len()))]
pub fn project(turns: &[Move], size: usize) -> Result<Board, MoveError> {
    let mut board = Board::new(size);
    for mv in turns.iter().rev() {
        board.set(mv.position, Square::Occupied(mv.player))?;
    }
    Ok(board)
}
