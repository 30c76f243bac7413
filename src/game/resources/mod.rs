//! Session-side bookkeeping: move history and captured pieces

pub mod captured;
pub mod history;

pub use captured::CapturedPieces;
pub use history::{MoveHistory, MoveRecord};
