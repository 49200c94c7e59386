//! Win detection against the winning-line catalog.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Scans the board for a winner.
///
/// Returns `Some(player)` if every square of some catalog line is
/// occupied by that player, `None` otherwise. The scan short-circuits
/// on the first satisfied line in catalog order (rows, then columns,
/// then diagonals), which makes the first-enumerated line authoritative
/// on a corrupted board; under valid sequential play at most one line
/// is ever satisfied, so the tie-break never fires.
#[instrument(skip(board, lines))]
pub fn check_winner(board: &Board, lines: &[Vec<Position>]) -> Option<Player> {
    for line in lines {
        let mut squares = line.iter().map(|pos| board.get(*pos));
        if let Some(Some(Square::Occupied(player))) = squares.next()
            && squares.all(|sq| sq == Some(Square::Occupied(player)))
        {
            return Some(player);
        }
    }
    None
}
