//! Session state machine
//!
//! Replaces nested "play again?" loops with one explicit state value owned by the session.
//!
//! # State Flow
//!
//! ```text
//! [AwaitingStart]
//!      ↓ start
//!  [Running] ⇄ (undo)
//!      ↓ win detected
//!  [Over(outcome)] → new game → [Running]
//! ```
//!
//! Moves are only accepted while `Running`.

use std::fmt;

use jungle_engine::Outcome;
use tracing::{error, info};

use crate::core::error::{CoreError, CoreResult};

/// Primary session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// The "new game" screen: nothing has been played yet
    #[default]
    AwaitingStart,

    /// A game is in progress
    Running,

    /// The game has been decided; the board is frozen until a new game or an undo
    Over(Outcome),
}

impl SessionState {
    pub fn is_running(self) -> bool {
        self == SessionState::Running
    }

    pub fn outcome(self) -> Option<Outcome> {
        match self {
            SessionState::Over(outcome) => Some(outcome),
            _ => None,
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::AwaitingStart => write!(f, "AwaitingStart"),
            SessionState::Running => write!(f, "Running"),
            SessionState::Over(outcome) => write!(f, "Over({} won)", outcome.winner),
        }
    }
}

/// Validate if a state transition is allowed
fn is_valid_state_transition(from: SessionState, to: SessionState) -> bool {
    match (from, to) {
        (SessionState::AwaitingStart, SessionState::Running) => true,

        // Running -> Running covers a new game started mid-play
        (SessionState::Running, SessionState::Running) => true,
        (SessionState::Running, SessionState::Over(_)) => true,

        // New game or undo out of a finished position
        (SessionState::Over(_), SessionState::Running) => true,

        _ => false,
    }
}

/// Move `state` to `next`, logging the transition
///
/// # Errors
///
/// Returns [`CoreError::InvalidTransition`] and leaves `state` untouched if the state machine
/// does not allow the move.
pub fn transition(state: &mut SessionState, next: SessionState) -> CoreResult<()> {
    let from = *state;
    if !is_valid_state_transition(from, next) {
        error!("[TRANSITION] INVALID: {} -> {}", from, next);
        return Err(CoreError::InvalidTransition { from, to: next });
    }

    info!("[TRANSITION] {} -> {}", from, next);
    *state = next;
    Ok(())
}
