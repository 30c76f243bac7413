//! AI opponent
//!
//! The engine's choosers are synchronous. The session calls them directly for autoplay; an
//! interactive front end can instead hand the position to an [`AiWorker`] thread and poll for
//! the reply so the prompt stays responsive.
//!
//! # Architecture
//!
//! - [`AiConfig`]: game mode, difficulty and chooser
//! - [`compute_ai_move`]: one blocking call into the engine for the configured chooser
//! - [`AiWorker`]: background thread fed through a `crossbeam-channel` request queue

use jungle_engine::{choose_ai_move_with_rng, choose_mcts_move_with_rng, Board, Move, Side};
use rand::Rng;

pub mod resource;
pub mod worker;

pub use resource::{AiChooser, AiConfig, AiDifficulty, GameMode};
pub use worker::{AiReply, AiWorker};

/// Ask the engine for `side`'s move using the chooser in `config`
pub fn compute_ai_move<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    config: &AiConfig,
    rng: &mut R,
) -> Option<Move> {
    match config.chooser {
        AiChooser::Minimax => choose_ai_move_with_rng(
            board,
            side,
            config.difficulty.search_depth(),
            config.strategy,
            rng,
        ),
        AiChooser::MonteCarlo { iterations } => {
            choose_mcts_move_with_rng(board, side, iterations, rng)
        }
    }
}
