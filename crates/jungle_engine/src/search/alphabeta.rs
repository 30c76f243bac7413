//! Minimax with alpha-beta pruning (iterative, no recursion)
//!
//! Classic two-sided minimax: the root side maximizes, its opponent minimizes, and every leaf is
//! scored with `evaluate(board, root_side)`. The recursion is replaced by an explicit stack of
//! [`SearchFrame`]s so the call stack never grows with depth.
//!
//! Differences from a textbook alpha-beta:
//! - The root collects **every** move that reaches the best score, so the caller can break ties
//! - Pruning happens only when `beta < alpha` (strictly), so equal scores are never cut
//! - A node with no legal moves is scored statically instead of as a loss; the caller reports
//!   "no move" only at the root

use tracing::debug;

use crate::board::Board;
use crate::constants::AB_INF;
use crate::error::{JungleEngineError, JungleEngineResult};
use crate::evaluation::evaluate;
use crate::move_gen::legal_moves;
use crate::status::is_decided;
use crate::types::*;

/// Score and tied best moves of a root search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    /// Every root move reaching `score`, in generation order. Empty when the root is terminal or
    /// has no legal moves.
    pub best_moves: Vec<Move>,
}

/// Node and cutoff counters, reset per search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// One simulated recursive call
struct SearchFrame {
    depth: u32,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    initialized: bool,
    move_index: usize,
    moves: Vec<Move>,
    best_score: i32,
    best_moves: Vec<Move>,
    made_move: Option<(Move, CaptureRecord)>,
    returning_score: Option<i32>,
}

impl SearchFrame {
    fn new(depth: u32, alpha: i32, beta: i32, maximizing: bool) -> Self {
        SearchFrame {
            depth,
            alpha,
            beta,
            maximizing,
            initialized: false,
            move_index: 0,
            moves: Vec::new(),
            best_score: if maximizing { -AB_INF } else { AB_INF },
            best_moves: Vec::new(),
            made_move: None,
            returning_score: None,
        }
    }
}

/// Pop the top frame and hand `score` to its parent
///
/// Returns the root result once the last frame is popped.
fn finish_frame(
    stack: &mut Vec<SearchFrame>,
    score: i32,
) -> JungleEngineResult<Option<SearchResult>> {
    let finished = stack
        .pop()
        .ok_or(JungleEngineError::StackUnderflow { depth: 0 })?;

    match stack.last_mut() {
        Some(parent) => {
            parent.returning_score = Some(score);
            Ok(None)
        }
        None => Ok(Some(SearchResult {
            score,
            best_moves: finished.best_moves,
        })),
    }
}

/// Search `depth` plies from `side`'s point of view
///
/// The board is restored to its original state before returning.
///
/// # Errors
///
/// Returns an error only if the frame stack is corrupted, which indicates a bug.
pub fn minimax(
    board: &mut Board,
    side: Side,
    depth: u32,
    stats: &mut SearchStats,
) -> JungleEngineResult<SearchResult> {
    let mut stack = vec![SearchFrame::new(depth, -AB_INF, AB_INF, true)];

    while let Some(frame) = stack.last_mut() {
        // === PHASE 1: Frame Initialization (first visit) ===
        if !frame.initialized {
            frame.initialized = true;
            stats.nodes += 1;

            if frame.depth == 0 || is_decided(board) {
                let score = evaluate(board, side);
                if let Some(result) = finish_frame(&mut stack, score)? {
                    return Ok(result);
                }
                continue;
            }

            let mover = if frame.maximizing { side } else { side.opponent() };
            frame.moves = legal_moves(board, mover);

            if frame.moves.is_empty() {
                let score = evaluate(board, side);
                if let Some(result) = finish_frame(&mut stack, score)? {
                    return Ok(result);
                }
                continue;
            }
        }

        // === PHASE 2: Process Returning Score from Child ===
        if let Some(score) = frame.returning_score.take() {
            let (mv, record) =
                frame
                    .made_move
                    .take()
                    .ok_or_else(|| JungleEngineError::SearchError {
                        message: format!("child score without a made move at depth {}", frame.depth),
                    })?;
            board.undo_move(mv, record);

            let improves = if frame.maximizing {
                score > frame.best_score
            } else {
                score < frame.best_score
            };
            if improves {
                frame.best_score = score;
                frame.best_moves.clear();
                frame.best_moves.push(mv);
            } else if score == frame.best_score {
                frame.best_moves.push(mv);
            }

            if frame.maximizing {
                frame.alpha = frame.alpha.max(score);
            } else {
                frame.beta = frame.beta.min(score);
            }

            if frame.beta < frame.alpha {
                stats.cutoffs += 1;
                let score = frame.best_score;
                if let Some(result) = finish_frame(&mut stack, score)? {
                    return Ok(result);
                }
                continue;
            }
        }

        // === PHASE 3: Try Next Move ===
        if frame.move_index < frame.moves.len() {
            let mv = frame.moves[frame.move_index];
            frame.move_index += 1;

            let child = SearchFrame::new(frame.depth - 1, frame.alpha, frame.beta, !frame.maximizing);
            let record = board.make_move(mv);
            frame.made_move = Some((mv, record));

            stack.push(child);
            continue;
        }

        // === PHASE 4: All Moves Processed - Return Result ===
        let score = frame.best_score;
        if let Some(result) = finish_frame(&mut stack, score)? {
            return Ok(result);
        }
    }

    Err(JungleEngineError::SearchError {
        message: format!("minimax: stack became empty unexpectedly at depth {}", depth),
    })
}

/// Convenience wrapper: search a scratch copy of `board` with `side` to move
pub fn search_best_moves(
    board: &Board,
    side: Side,
    depth: u32,
) -> JungleEngineResult<(SearchResult, SearchStats)> {
    let mut scratch = board.clone();
    scratch.set_side_to_move(side);

    let mut stats = SearchStats::default();
    let result = minimax(&mut scratch, side, depth, &mut stats)?;

    debug!(
        "[AI] minimax depth {} for {}: score {}, {} tied moves, {} nodes, {} cutoffs",
        depth,
        side,
        result.score,
        result.best_moves.len(),
        stats.nodes,
        stats.cutoffs
    );

    Ok((result, stats))
}
