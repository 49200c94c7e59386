//! Turn resolution from the move log.

use crate::action::Move;
use crate::types::Player;

/// Derives the player whose turn it is from the move log.
///
/// X opens on an empty log; otherwise the active player is the opponent
/// of whoever played the move at index 0. The log is newest-first, so
/// this is O(1), but it leans on the log's integrity: the shortcut
/// assumes exactly two strictly alternating marks and does not recount
/// the full history.
pub fn active_player(turns: &[Move]) -> Player {
    match turns.first() {
        None => Player::X,
        Some(last) => last.player.opponent(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_x_opens_empty_log() {
        assert_eq!(active_player(&[]), Player::X);
    }

    #[test]
    fn test_opponent_of_latest_move() {
        let turns = vec![Move::new(Position::new(0, 0), Player::X)];
        assert_eq!(active_player(&turns), Player::O);

        let turns = vec![
            Move::new(Position::new(1, 1), Player::O),
            Move::new(Position::new(0, 0), Player::X),
        ];
        assert_eq!(active_player(&turns), Player::X);
    }

    #[test]
    fn test_alternation_over_a_longer_log() {
        let mut turns: Vec<Move> = Vec::new();
        let cells = [(0, 0), (1, 1), (0, 1), (2, 2), (2, 0)];
        for (i, (row, col)) in cells.into_iter().enumerate() {
            let player = if i % 2 == 0 { Player::X } else { Player::O };
            turns.insert(0, Move::new(Position::new(row, col), player));
            assert_eq!(active_player(&turns), player.opponent());
        }
    }
}
