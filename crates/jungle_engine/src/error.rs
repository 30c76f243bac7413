//! Error types for the jungle engine
//!
//! Only the validating entry points (`api::apply_move`) return these. Legality probes such as
//! `api::is_legal_move` answer with a plain `bool`, and a side with no legal moves is a game
//! status, not an error.

use thiserror::Error;

use crate::types::{Position, Side};

/// Errors that can occur in the jungle engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JungleEngineError {
    /// Position outside the 7×9 grid
    #[error("Invalid position: ({col}, {row}) is outside the 7x9 board")]
    InvalidPosition { col: i8, row: i8 },

    /// No piece at source cell
    #[error("No piece at {position}")]
    NoPieceAtPosition { position: Position },

    /// Piece does not belong to the side to move
    #[error("Piece at {position} belongs to {owner}, but it is {to_move}'s turn")]
    WrongSide {
        position: Position,
        owner: Side,
        to_move: Side,
    },

    /// Move fails the legality checks
    #[error("Illegal move: {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    /// The game is already decided
    #[error("Game is over: {winner} has won")]
    GameOver { winner: Side },

    /// Search stack underflow (should never happen)
    #[error("Search stack underflow at depth {depth}")]
    StackUnderflow { depth: u32 },

    /// Internal search error
    #[error("Search error: {message}")]
    SearchError { message: String },
}

impl JungleEngineError {
    pub fn invalid_position(position: Position) -> Self {
        JungleEngineError::InvalidPosition {
            col: position.col,
            row: position.row,
        }
    }
}

/// Result type alias for jungle engine operations
pub type JungleEngineResult<T> = Result<T, JungleEngineError>;
