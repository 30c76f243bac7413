//! Game front end
//!
//! Everything between the engine and the terminal: the session that owns a game in progress,
//! the AI opponent, square notation and text rendering.
//!
//! # Module Organization
//!
//! - `session` - [`Session`]: modal state, turn ownership, undo
//! - `ai` - Game modes, difficulty, chooser selection and the background worker
//! - `resources` - Move history and captured pieces
//! - `notation` - `a1`..`g9` square names
//! - `render` - Text board
//! - `error` - [`GameError`]

pub mod ai;
pub mod error;
pub mod notation;
pub mod render;
pub mod resources;
pub mod session;

pub use error::{GameError, GameResult};
pub use session::Session;
