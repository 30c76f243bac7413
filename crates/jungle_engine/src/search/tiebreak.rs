//! Tie-breaking among equally scored moves
//!
//! Minimax often returns many moves with the same score, especially at low depth. Rather than
//! pick blindly, prefer the moves that start a globally shortest route to a target (see
//! `pathfind.rs`). If none of the tied moves does, fall back to any of them.

use std::collections::BTreeSet;

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use super::pathfind::{shortest_first_steps, PathStrategy};
use crate::board::Board;
use crate::types::*;

/// First steps of the cheapest routes over all of `side`'s pieces
pub fn path_candidates(board: &Board, side: Side, strategy: PathStrategy) -> BTreeSet<Move> {
    let mut best_cost: Option<i32> = None;
    let mut candidates = BTreeSet::new();

    for piece in board.pieces_of(side) {
        let Some(hit) = shortest_first_steps(board, piece, strategy) else {
            continue;
        };

        match best_cost {
            Some(cost) if hit.cost > cost => {}
            Some(cost) if hit.cost == cost => candidates.extend(hit.first_steps),
            _ => {
                best_cost = Some(hit.cost);
                candidates = hit.first_steps;
            }
        }
    }

    candidates
}

/// Pick one of `best_moves`, preferring those that start a shortest route
///
/// Returns `None` only when `best_moves` is empty.
pub fn choose_among_best<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    best_moves: &[Move],
    strategy: PathStrategy,
    rng: &mut R,
) -> Option<Move> {
    if best_moves.len() <= 1 {
        return best_moves.first().copied();
    }

    let candidates = path_candidates(board, side, strategy);
    let preferred: Vec<Move> = best_moves
        .iter()
        .copied()
        .filter(|mv| candidates.contains(mv))
        .collect();

    debug!(
        "[AI] tie-break for {}: {} tied, {} on a shortest route",
        side,
        best_moves.len(),
        preferred.len()
    );

    if preferred.is_empty() {
        best_moves.choose(rng).copied()
    } else {
        preferred.choose(rng).copied()
    }
}
