//! Public API for the jungle engine
//!
//! Provides high-level functions for game management and AI move generation. Interactive probes
//! (`is_legal_move`) answer with a `bool`; the validating entry point (`apply_move`) returns a
//! [`JungleEngineResult`](crate::error::JungleEngineResult).
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, reset_game)
//! - `moves` - Move execution and validation (apply_move, undo_move, is_legal_move)
//! - `state` - Game state queries and AI (game_status, choose_ai_move)

mod game;
mod moves;
mod state;

pub use game::{new_game, reset_game};
pub use moves::{apply_move, is_legal_move, legal_moves, undo_move};
pub use state::{
    choose_ai_move, choose_ai_move_with_rng, choose_mcts_move, choose_mcts_move_with_rng,
    game_outcome, game_status,
};
