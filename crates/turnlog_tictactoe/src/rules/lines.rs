//! Winning-line catalog for square boards.

use crate::position::Position;

/// Enumerates every winning line for a board of the given side length.
///
/// A line is a full row, a full column, or one of the two diagonals;
/// each holds exactly `size` positions. Enumeration order is fixed:
/// rows top to bottom, then columns left to right, then the main
/// diagonal, then the anti diagonal. For the default 3x3 board this
/// yields 8 lines; in general `2 * size + 2`.
///
/// The catalog is immutable once built; [`GameSession`] computes it a
/// single time at construction and reuses it for every evaluation.
///
/// [`GameSession`]: crate::GameSession
pub fn winning_lines(size: usize) -> Vec<Vec<Position>> {
    let mut lines = Vec::with_capacity(2 * size + 2);

    for row in 0..size {
        lines.push((0..size).map(|col| Position::new(row, col)).collect());
    }
    for col in 0..size {
        lines.push((0..size).map(|row| Position::new(row, col)).collect());
    }
    lines.push((0..size).map(|i| Position::new(i, i)).collect());
    lines.push((0..size).map(|i| Position::new(i, size - 1 - i)).collect());

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_has_eight_lines() {
        let lines = winning_lines(3);
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().all(|line| line.len() == 3));
    }

    #[test]
    fn test_line_count_scales_with_size() {
        for size in 3..=6 {
            let lines = winning_lines(size);
            assert_eq!(lines.len(), 2 * size + 2);
            assert!(lines.iter().all(|line| line.len() == size));
        }
    }

    #[test]
    fn test_enumeration_order_rows_columns_diagonals() {
        let lines = winning_lines(3);
        // First row, first column, main diagonal, anti diagonal.
        assert_eq!(
            lines[0],
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2)
            ]
        );
        assert_eq!(
            lines[3],
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0)
            ]
        );
        assert_eq!(
            lines[6],
            vec![
                Position::new(0, 0),
                Position::new(1, 1),
                Position::new(2, 2)
            ]
        );
        assert_eq!(
            lines[7],
            vec![
                Position::new(0, 2),
                Position::new(1, 1),
                Position::new(2, 0)
            ]
        );
    }

    #[test]
    fn test_all_positions_in_bounds() {
        let lines = winning_lines(5);
        assert!(
            lines
                .iter()
                .flatten()
                .all(|pos| pos.in_bounds(5))
        );
    }
}
