//! Move making and unmaking
//!
//! Every state change of the board goes through these two methods: the interactive API, the
//! minimax search and the Monte Carlo playouts all share them. `make_move` returns the undo
//! information; handing it back to `undo_move` restores the exact previous state, including the
//! history, the captured stack, the side to move and the forbidden move.

use crate::board::Board;
use crate::repetition::forbidden_move;
use crate::types::*;

impl Board {
    /// Move the piece on `mv.from` to `mv.to`, capturing any occupant
    ///
    /// Legality is **not** checked; use `move_gen::is_legal` or `api::apply_move` for that.
    /// Afterwards it is the mover's opponent's turn.
    ///
    /// # Panics
    ///
    /// Panics if there is no piece on `mv.from`.
    pub fn make_move(&mut self, mv: Move) -> CaptureRecord {
        let Some(mover) = self.piece_at(mv.from).copied() else {
            panic!("make_move: no piece on {}", mv.from);
        };

        let captured = self.remove_piece(mv.to);
        if let Some(defender) = captured {
            self.captured.push((mv.to, defender));
        }
        self.relocate(mv.from, mv.to);

        self.history.push(mv);
        self.pass_turn_to(mover.side.opponent());
        self.forbidden = forbidden_move(&self.history);

        CaptureRecord { captured }
    }

    /// Exact inverse of [`Board::make_move`]
    ///
    /// `mv` must be the last move made and `record` the value that move returned.
    pub fn undo_move(&mut self, mv: Move, record: CaptureRecord) {
        debug_assert_eq!(self.history.last(), Some(&mv), "undo_move: not the last move");

        if let Some(mover) = self.relocate(mv.to, mv.from) {
            self.pass_turn_to(mover.side);
        }

        if let Some(defender) = record.captured {
            let restored = self.captured.pop();
            debug_assert_eq!(restored.map(|(at, _)| at), Some(mv.to));
            self.add_piece(Piece { position: mv.to, ..defender });
        }

        self.history.pop();
        self.forbidden = forbidden_move(&self.history);
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::types::*;

    fn pos(col: i8, row: i8) -> Position {
        Position::new(col, row)
    }

    #[test]
    fn test_make_move_switches_turn_and_records_history() {
        let mut board = Board::standard();
        let mv = Move::new(pos(5, 7), pos(5, 6));

        let record = board.make_move(mv);

        assert!(!record.is_capture());
        assert_eq!(board.side_to_move(), Side::Dark);
        assert_eq!(board.history(), &[mv]);
        assert!(board.piece_at(pos(5, 7)).is_none());
        assert_eq!(board.piece_at(pos(5, 6)).map(|p| p.kind), Some(Kind::Dog));
    }

    #[test]
    fn test_capture_and_undo_restore_everything() {
        let mut board = Board::empty();
        board.place(Kind::Rat, Side::Light, pos(3, 4));
        board.place(Kind::Elephant, Side::Dark, pos(3, 3));
        board.place(Kind::Cat, Side::Dark, pos(0, 0));
        let before = board.clone();

        let mv = Move::new(pos(3, 4), pos(3, 3));
        let record = board.make_move(mv);

        assert_eq!(record.captured.map(|p| p.kind), Some(Kind::Elephant));
        assert_eq!(board.captured_pieces().len(), 1);
        assert_eq!(board.piece_count(Side::Dark), 1);

        board.undo_move(mv, record);
        assert_eq!(board, before);
    }

    #[test]
    fn test_undo_sequence_returns_to_start() {
        let mut board = Board::standard();
        let start = board.clone();
        let moves = [
            Move::new(pos(5, 7), pos(5, 6)),
            Move::new(pos(1, 1), pos(1, 2)),
            Move::new(pos(5, 6), pos(5, 5)),
        ];

        let mut records = Vec::new();
        for mv in moves {
            records.push((mv, board.make_move(mv)));
        }
        while let Some((mv, record)) = records.pop() {
            board.undo_move(mv, record);
        }

        assert_eq!(board, start);
    }

    #[test]
    #[should_panic(expected = "no piece")]
    fn test_make_move_from_empty_cell_panics() {
        let mut board = Board::standard();
        board.make_move(Move::new(pos(3, 4), pos(3, 5)));
    }
}
