//! # Jungle Engine
//!
//! Rules engine and AI for Jungle (Dou Shou Qi, "Animal Chess"): a 7×9 board with two rivers,
//! six traps and two dens, and eight ranked animals per side.
//!
//! ## Overview
//!
//! - **Rules**: legal moves for every piece, including swimming, river leaps, trap neutralization
//!   and the Rat/Elephant exception, plus an anti-shuffling rule that forbids the same back and
//!   forth move a third time
//! - **Win detection**: den invasion, annihilation, no legal moves
//! - **AI**: minimax with alpha-beta pruning, path-search tie-breaking, Monte Carlo tree search
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jungle_engine::{apply_move, choose_ai_move, game_status, new_game, GameStatus, Side};
//!
//! let mut board = new_game();
//! while game_status(&board) == GameStatus::InProgress {
//!     let side = board.side_to_move();
//!     let Some(mv) = choose_ai_move(&board, side, 2) else { break };
//!     apply_move(&mut board, mv.from, mv.to)?;
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `api` - Public entry points (game lifecycle, moves, status, AI)
//! - `board` - Cells and the board aggregate
//! - `constants` - Layout, evaluation weights, search parameters
//! - `error` - Engine error type
//! - `evaluation` - Static evaluation
//! - `move_gen` - Legal move generation and capture rules
//! - `repetition` - Anti-shuffling rule
//! - `search` - Minimax, path search, MCTS
//! - `status` - Win detection
//! - `types` - Positions, pieces, moves

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod move_gen;
mod repetition;
pub mod search;
pub mod status;
pub mod types;

pub use api::*;
pub use board::{Board, Cell};
pub use error::{JungleEngineError, JungleEngineResult};
pub use evaluation::evaluate;
pub use move_gen::available_cells;
pub use search::PathStrategy;
pub use status::{GameStatus, Outcome, WinReason};
pub use types::*;
