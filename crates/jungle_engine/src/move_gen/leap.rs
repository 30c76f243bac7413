//! River leaps for Lions and Tigers
//!
//! A leaper standing next to the river may jump straight across it, landing on the first cell
//! past the water. The jump is blocked when any river cell on the path is occupied. Only
//! swimmers can stand in the river, so in practice a Rat or a Dog in the way stops the leap.
//! A blocked leap has no fallback: the leaper simply has no move in that direction.

use crate::board::Board;
use crate::types::*;

/// Landing cell of a leap from `from` in `direction`, or `None` when there is no leap
///
/// `None` when the neighbouring cell is not river, when the path is blocked, or when the
/// landing would be off the board.
pub(crate) fn leap_landing(board: &Board, from: Position, direction: Direction) -> Option<Position> {
    let mut cursor = from.step(direction);
    if !board.is_river(cursor) {
        return None;
    }

    while board.is_river(cursor) {
        if !board.get_cell(cursor).is_empty() {
            return None;
        }
        cursor = cursor.step(direction);
    }

    cursor.is_in_board().then_some(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_leap_crosses_three_cells() {
        let board = Board::empty();
        let landing = leap_landing(&board, Position::new(1, 2), Direction::Down);
        assert_eq!(landing, Some(Position::new(1, 6)));

        let landing = leap_landing(&board, Position::new(5, 6), Direction::Up);
        assert_eq!(landing, Some(Position::new(5, 2)));
    }

    #[test]
    fn test_horizontal_leap_crosses_two_cells() {
        let board = Board::empty();
        let landing = leap_landing(&board, Position::new(0, 4), Direction::Right);
        assert_eq!(landing, Some(Position::new(3, 4)));

        let landing = leap_landing(&board, Position::new(3, 3), Direction::Right);
        assert_eq!(landing, Some(Position::new(6, 3)));

        let landing = leap_landing(&board, Position::new(3, 5), Direction::Left);
        assert_eq!(landing, Some(Position::new(0, 5)));
    }

    #[test]
    fn test_swimmer_blocks_leap() {
        let mut board = Board::empty();
        board.place(Kind::Rat, Side::Dark, Position::new(1, 4));
        assert_eq!(leap_landing(&board, Position::new(1, 2), Direction::Down), None);

        // Own swimmer blocks too
        let mut board = Board::empty();
        board.place(Kind::Dog, Side::Light, Position::new(2, 3));
        assert_eq!(leap_landing(&board, Position::new(2, 2), Direction::Down), None);
    }

    #[test]
    fn test_no_leap_away_from_river() {
        let board = Board::empty();
        assert_eq!(leap_landing(&board, Position::new(3, 4), Direction::Up), None);
        assert_eq!(leap_landing(&board, Position::new(0, 0), Direction::Right), None);
    }
}
