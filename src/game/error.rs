//! Error types for game module
//!
//! Provides custom error types for the session layer: turn ownership, input parsing, the AI
//! worker and engine rejections.

use jungle_engine::{JungleEngineError, Position, Side};

use crate::core::{CoreError, SessionState};

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Engine rejected the move
    #[error(transparent)]
    Engine(#[from] JungleEngineError),

    /// Session state machine error
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Operation needs a running game
    #[error("No game in progress (session is {state})")]
    NotRunning { state: SessionState },

    /// A human tried to move for the AI
    #[error("It is {side}'s turn and {side} is played by the computer")]
    NotYourTurn { side: Side },

    /// Selected cell holds no piece of the side to move
    #[error("Nothing to select at {position}")]
    InvalidSelection { position: Position },

    /// Could not parse a board coordinate
    #[error("Invalid square '{input}' (expected a1..g9)")]
    InvalidNotation { input: String },

    /// Undo with an empty history
    #[error("No move to undo")]
    NothingToUndo,

    /// AI reply computed for a position that no longer exists
    #[error("Stale AI reply for ply {ply}")]
    StaleAiReply { ply: usize },

    /// AI worker thread unavailable
    #[error("AI unavailable: {message}")]
    AiUnavailable { message: String },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
