//! Draw detection.

use crate::types::Player;

/// Checks whether the game is drawn.
///
/// A draw is a full board with no winner; the board is full exactly
/// when the move count reaches `size * size`, since each accepted move
/// fills one cell.
pub fn is_draw(move_count: usize, size: usize, winner: Option<Player>) -> bool {
    winner.is_none() && move_count == size * size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_log_is_not_a_draw() {
        assert!(!is_draw(0, 3, None));
    }

    #[test]
    fn test_partial_board_is_not_a_draw() {
        assert!(!is_draw(5, 3, None));
    }

    #[test]
    fn test_full_board_without_winner_is_a_draw() {
        assert!(is_draw(9, 3, None));
        assert!(is_draw(16, 4, None));
    }

    #[test]
    fn test_full_board_with_winner_is_not_a_draw() {
        assert!(!is_draw(9, 3, Some(Player::X)));
    }
}
