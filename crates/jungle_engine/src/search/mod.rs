//! Move choosers
//!
//! This module implements the AI opponent:
//! - Minimax with alpha-beta pruning (ITERATIVE - no recursion), collecting every tied best move
//! - Path-search tie-breaking (BFS or A*) among the tied moves
//! - Monte Carlo tree search as an alternative chooser
//!
//! All choosers work on a private copy of the board, so the caller's board is never touched.
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core minimax/alpha-beta search
//! - `make_unmake` - Move making/unmaking (shared with the public API)
//! - `pathfind` - Shortest routes to targets
//! - `tiebreak` - Picking one move among equals
//! - `mcts` - Monte Carlo tree search

mod alphabeta;
mod make_unmake;
mod mcts;
mod pathfind;
mod tiebreak;

pub use alphabeta::{minimax, search_best_moves, SearchResult, SearchStats};
pub use mcts::mcts_search;
pub use pathfind::{shortest_first_steps, PathHit, PathStrategy};
pub use tiebreak::{choose_among_best, path_candidates};

use rand::Rng;
use tracing::warn;

use crate::board::Board;
use crate::constants::MAX_SEARCH_DEPTH;
use crate::move_gen::legal_moves;
use crate::types::{Move, Side};

/// Minimax to `depth` plies, then break ties by path search
///
/// `depth` is clamped to `1..=MAX_SEARCH_DEPTH`. Returns `None` when `side` has no legal move
/// or the game is already decided.
pub fn find_best_move<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    depth: u32,
    strategy: PathStrategy,
    rng: &mut R,
) -> Option<Move> {
    let depth = depth.clamp(1, MAX_SEARCH_DEPTH);

    match search_best_moves(board, side, depth) {
        Ok((result, _)) => choose_among_best(board, side, &result.best_moves, strategy, rng),
        Err(e) => {
            // Fall back to any legal move rather than stalling the game
            warn!("[AI] Search error at depth {}: {}", depth, e);
            let mut turn = board.clone();
            turn.set_side_to_move(side);
            legal_moves(&turn, side).first().copied()
        }
    }
}
