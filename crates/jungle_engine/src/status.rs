//! Win detection
//!
//! Checked in this order after every move:
//!
//! 1. **Den invasion** - a piece stands in the opponent's den
//! 2. **Annihilation** - one side has no pieces left
//! 3. **No legal moves** - the side to move cannot move (the forbidden move counts as unavailable)
//!
//! The first two are properties of the position alone and are what the search treats as terminal.
//! The third depends on whose turn it is.

use std::fmt;

use crate::board::Board;
use crate::move_gen::has_any_legal_move;
use crate::types::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won(Side),
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Won(_))
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(side) => Some(side),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinReason {
    DenInvaded,
    Annihilated,
    NoLegalMoves,
}

impl fmt::Display for WinReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinReason::DenInvaded => write!(f, "den invaded"),
            WinReason::Annihilated => write!(f, "all opposing pieces captured"),
            WinReason::NoLegalMoves => write!(f, "opponent has no legal moves"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome {
    pub winner: Side,
    pub reason: WinReason,
}

/// Whether one of `side`'s pieces stands in the opponent's den
pub fn den_invaded_by(board: &Board, side: Side) -> bool {
    board
        .piece_at(Board::den_of(side.opponent()))
        .is_some_and(|piece| piece.side == side)
}

/// Den invasion or annihilation, independent of whose turn it is
pub fn decided_outcome(board: &Board) -> Option<Outcome> {
    // The side that just moved is the only one that can have reached a den this turn
    let last_mover = board.side_to_move().opponent();
    for side in [last_mover, last_mover.opponent()] {
        if den_invaded_by(board, side) {
            return Some(Outcome {
                winner: side,
                reason: WinReason::DenInvaded,
            });
        }
    }

    for side in Side::ALL {
        if board.piece_count(side) == 0 {
            return Some(Outcome {
                winner: side.opponent(),
                reason: WinReason::Annihilated,
            });
        }
    }

    None
}

/// Full outcome check, including "side to move is stuck"
pub fn game_outcome(board: &Board) -> Option<Outcome> {
    decided_outcome(board).or_else(|| {
        let to_move = board.side_to_move();
        (!has_any_legal_move(board, to_move)).then_some(Outcome {
            winner: to_move.opponent(),
            reason: WinReason::NoLegalMoves,
        })
    })
}

pub fn game_status(board: &Board) -> GameStatus {
    match game_outcome(board) {
        Some(outcome) => GameStatus::Won(outcome.winner),
        None => GameStatus::InProgress,
    }
}

/// Den invasion or annihilation (the search's terminal test)
#[inline]
pub fn is_decided(board: &Board) -> bool {
    decided_outcome(board).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::*;

    fn pos(col: i8, row: i8) -> Position {
        Position::new(col, row)
    }

    #[test]
    fn test_opening_is_in_progress() {
        let board = Board::standard();
        assert_eq!(game_status(&board), GameStatus::InProgress);
        assert!(!is_decided(&board));
    }

    #[test]
    fn test_den_invasion_wins() {
        let mut board = Board::empty();
        board.place(Kind::Cat, Side::Light, pos(2, 0));
        board.place(Kind::Cat, Side::Dark, pos(6, 8));
        board.make_move(Move::new(pos(2, 0), pos(3, 0)));

        let outcome = game_outcome(&board);
        assert_eq!(
            outcome,
            Some(Outcome {
                winner: Side::Light,
                reason: WinReason::DenInvaded
            })
        );
        assert_eq!(game_status(&board), GameStatus::Won(Side::Light));
    }

    #[test]
    fn test_den_beats_annihilation() {
        // Dark has no pieces and Light sits in the Dark den: the den is reported
        let mut board = Board::empty();
        board.place(Kind::Lion, Side::Light, pos(3, 0));

        let outcome = decided_outcome(&board);
        assert_eq!(outcome.map(|o| o.reason), Some(WinReason::DenInvaded));
        assert_eq!(outcome.map(|o| o.winner), Some(Side::Light));
    }

    #[test]
    fn test_annihilation_wins() {
        let mut board = Board::empty();
        board.place(Kind::Lion, Side::Light, pos(3, 4));
        board.place(Kind::Cat, Side::Dark, pos(3, 3));
        board.make_move(Move::new(pos(3, 4), pos(3, 3)));

        let outcome = game_outcome(&board);
        assert_eq!(outcome.map(|o| o.reason), Some(WinReason::Annihilated));
        assert_eq!(game_status(&board).winner(), Some(Side::Light));
    }

    #[test]
    fn test_no_legal_moves_loses() {
        // Dark Cat boxed into a corner by Light Elephants it cannot take
        let mut board = Board::empty();
        board.place(Kind::Cat, Side::Dark, pos(0, 8));
        board.place(Kind::Elephant, Side::Light, pos(1, 8));
        board.place(Kind::Elephant, Side::Light, pos(0, 7));
        board.set_side_to_move(Side::Dark);

        assert!(!is_decided(&board));
        let outcome = game_outcome(&board);
        assert_eq!(
            outcome,
            Some(Outcome {
                winner: Side::Light,
                reason: WinReason::NoLegalMoves
            })
        );
    }
}
