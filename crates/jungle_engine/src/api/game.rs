//! Game lifecycle management
//!
//! Functions for creating and resetting games.

use crate::board::Board;

/// Create a new game with the standard starting position, Light to move
pub fn new_game() -> Board {
    Board::standard()
}

/// Reset the game to the starting position
///
/// The board is rebuilt wholesale: pieces, history, captures and the forbidden move all go.
pub fn reset_game(board: &mut Board) {
    *board = Board::standard();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::*;

    #[test]
    fn test_new_game_setup() {
        let board = new_game();
        assert_eq!(board.side_to_move(), Side::Light);
        assert_eq!(board.piece_count(Side::Dark), 8);
        assert_eq!(board.piece_count(Side::Light), 8);
        assert!(board.history().is_empty());
        assert_eq!(board.forbidden_move(), None);
    }

    #[test]
    fn test_reset_game() {
        let mut board = new_game();
        board.make_move(Move::new(Position::new(5, 7), Position::new(5, 6)));
        reset_game(&mut board);
        assert_eq!(board, new_game());
    }
}
