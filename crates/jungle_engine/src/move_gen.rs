//! Move generation
//!
//! Every piece moves one cell orthogonally. On top of that:
//! - Only swimmers (Rat, Dog) may enter river cells
//! - Leapers (Lion, Tiger) jump across the river instead (see `leap.rs`)
//! - A piece may never enter its own den; the opponent's den is always open
//! - A piece may enter an opposing cell only if it can defeat the occupant (see `combat.rs`)
//!
//! The forbidden move of the repetition rule is removed last, and only for the side to move.
//!
//! ## Module Organization
//!
//! - `combat` - Capture resolution (ranks, traps, Rat/Elephant)
//! - `leap` - River leaps

pub mod combat;
mod leap;

use crate::board::Board;
use crate::types::*;

use combat::can_defeat;
use leap::leap_landing;

/// Where `piece` would arrive moving in `direction`, ignoring whatever occupies the target
fn destination(board: &Board, piece: &Piece, direction: Direction) -> Option<Position> {
    let next = piece.position.step(direction);
    if !next.is_in_board() {
        return None;
    }

    if !board.is_river(next) {
        return Some(next);
    }

    if piece.kind.can_swim() {
        Some(next)
    } else if piece.kind.can_leap() {
        leap_landing(board, piece.position, direction)
    } else {
        None
    }
}

/// Whether `piece` may finish its move on `to`, given what is there
fn can_enter(board: &Board, piece: &Piece, to: Position) -> bool {
    let cell = board.get_cell(to);
    if cell.is_den_of(piece.side) {
        return false;
    }

    match cell.piece() {
        None => true,
        Some(occupant) if occupant.side == piece.side => false,
        Some(occupant) => can_defeat(board, piece, occupant),
    }
}

/// All cells `piece` can move to, before the repetition ban is applied
///
/// The path search uses this directly: the ban only concerns the very next move.
pub(crate) fn reachable_cells(board: &Board, piece: &Piece) -> Vec<Position> {
    Direction::ALL
        .iter()
        .filter_map(|&direction| destination(board, piece, direction))
        .filter(|&to| can_enter(board, piece, to))
        .collect()
}

/// All cells `piece` can legally move to right now
pub fn available_cells(board: &Board, piece: &Piece) -> Vec<Position> {
    let mut cells = reachable_cells(board, piece);

    if let Some(banned) = board.forbidden_move() {
        if piece.side == board.side_to_move() && piece.position == banned.from {
            cells.retain(|&to| to != banned.to);
        }
    }

    cells
}

/// All legal moves of `side`, in board order
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();
    for piece in board.pieces_of(side) {
        for to in available_cells(board, piece) {
            moves.push(Move::new(piece.position, to));
        }
    }
    moves
}

pub fn has_any_legal_move(board: &Board, side: Side) -> bool {
    board
        .pieces_of(side)
        .any(|piece| !available_cells(board, piece).is_empty())
}

/// Whether `mv` is a legal move for the side to move
///
/// Out-of-board positions simply make the move illegal.
pub fn is_legal(board: &Board, mv: Move) -> bool {
    if !mv.from.is_in_board() || !mv.to.is_in_board() {
        return false;
    }

    match board.piece_at(mv.from) {
        Some(piece) if piece.side == board.side_to_move() => {
            available_cells(board, piece).contains(&mv.to)
        }
        _ => false,
    }
}
