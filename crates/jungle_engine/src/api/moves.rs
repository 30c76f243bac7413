//! Move execution and validation
//!
//! Functions for executing moves and checking move legality.

use tracing::debug;

use crate::board::Board;
use crate::error::{JungleEngineError, JungleEngineResult};
use crate::move_gen;
use crate::status::{game_outcome, is_decided};
use crate::types::*;

/// All legal moves of `side` (no duplicates)
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    move_gen::legal_moves(board, side)
}

/// Check if a move is legal for the side to move
///
/// Never errors: off-board positions, an empty source, the wrong side's piece and a finished
/// game all simply answer `false`. Front ends call this on every hover or click.
pub fn is_legal_move(board: &Board, from: Position, to: Position) -> bool {
    !is_decided(board) && move_gen::is_legal(board, Move::new(from, to))
}

/// Validate and execute a move
///
/// # Errors
///
/// - [`JungleEngineError::InvalidPosition`] if either position is off the board
/// - [`JungleEngineError::GameOver`] if the game is already decided
/// - [`JungleEngineError::NoPieceAtPosition`] if `from` is empty
/// - [`JungleEngineError::WrongSide`] if the piece is not the side to move's
/// - [`JungleEngineError::IllegalMove`] if the piece cannot go to `to`
///
/// # Examples
///
/// ```rust,ignore
/// // Light's Dog steps forward from f8 to f7
/// let mut board = new_game();
/// let record = apply_move(&mut board, Position::new(5, 7), Position::new(5, 6))?;
/// assert!(!record.is_capture());
/// ```
pub fn apply_move(
    board: &mut Board,
    from: Position,
    to: Position,
) -> JungleEngineResult<CaptureRecord> {
    for position in [from, to] {
        if !position.is_in_board() {
            return Err(JungleEngineError::invalid_position(position));
        }
    }

    if let Some(outcome) = game_outcome(board) {
        return Err(JungleEngineError::GameOver {
            winner: outcome.winner,
        });
    }

    let piece = *board
        .piece_at(from)
        .ok_or(JungleEngineError::NoPieceAtPosition { position: from })?;

    let to_move = board.side_to_move();
    if piece.side != to_move {
        return Err(JungleEngineError::WrongSide {
            position: from,
            owner: piece.side,
            to_move,
        });
    }

    let mv = Move::new(from, to);
    if !move_gen::is_legal(board, mv) {
        return Err(JungleEngineError::IllegalMove { from, to });
    }

    let record = board.make_move(mv);
    match record.captured {
        Some(captured) => debug!("[ENGINE] {} {} takes {}", piece.side, piece.kind, captured),
        None => debug!("[ENGINE] {} {} {}", piece.side, piece.kind, mv),
    }

    Ok(record)
}

/// Take back the last move
///
/// `record` must be the value `apply_move` returned for that move.
pub fn undo_move(board: &mut Board, from: Position, to: Position, record: CaptureRecord) {
    board.undo_move(Move::new(from, to), record);
}
