//! Monte Carlo tree search
//!
//! An alternative chooser with the same contract as minimax (board + side in, move out).
//! Each iteration runs the four classic phases on a scratch copy of the root board:
//!
//! 1. **Selection** - descend through fully expanded nodes by UCB1 (`UCB1_EXPLORATION` = √2)
//! 2. **Expansion** - add one untried move as a new child
//! 3. **Playout** - play uniformly random legal moves until the game ends or `MAX_PLAYOUT_PLIES`
//! 4. **Backpropagation** - credit 1 for a win, 0.5 for a draw (ply cap), 0 for a loss, from the
//!    point of view of the side that moved into each node
//!
//! The tree lives in a flat arena of nodes addressed by index.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::board::Board;
use crate::constants::{MAX_PLAYOUT_PLIES, UCB1_EXPLORATION};
use crate::move_gen::legal_moves;
use crate::status::game_outcome;
use crate::types::*;

struct Node {
    mv: Option<Move>,
    parent: Option<usize>,
    children: Vec<usize>,
    untried: Vec<Move>,
    /// Side that played `mv` (the root: the opponent of the searching side)
    just_moved: Side,
    visits: u32,
    wins: f64,
}

impl Node {
    fn new(mv: Option<Move>, parent: Option<usize>, just_moved: Side, board: &Board) -> Self {
        let untried = if game_outcome(board).is_some() {
            Vec::new()
        } else {
            legal_moves(board, board.side_to_move())
        };

        Node {
            mv,
            parent,
            children: Vec::new(),
            untried,
            just_moved,
            visits: 0,
            wins: 0.0,
        }
    }

    fn ucb1(&self, parent_visits: u32) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let visits = self.visits as f64;
        self.wins / visits + UCB1_EXPLORATION * ((parent_visits as f64).ln() / visits).sqrt()
    }
}

/// Result of a random playout from the point of view of one side
fn playout_score(winner: Option<Side>, side: Side) -> f64 {
    match winner {
        Some(w) if w == side => 1.0,
        Some(_) => 0.0,
        None => 0.5,
    }
}

/// Play random moves until the game is decided; `None` means the ply cap was hit
fn random_playout<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<Side> {
    for _ in 0..MAX_PLAYOUT_PLIES {
        if let Some(outcome) = game_outcome(board) {
            return Some(outcome.winner);
        }
        let moves = legal_moves(board, board.side_to_move());
        let mv = *moves.choose(rng)?;
        board.make_move(mv);
    }
    game_outcome(board).map(|outcome| outcome.winner)
}

/// Run `iterations` rounds of MCTS for `side` and return the most visited root move
///
/// Returns `None` when `side` has no legal move.
pub fn mcts_search<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    iterations: u32,
    rng: &mut R,
) -> Option<Move> {
    let mut root_board = board.clone();
    root_board.set_side_to_move(side);

    let mut nodes = vec![Node::new(None, None, side.opponent(), &root_board)];
    if nodes[0].untried.is_empty() {
        return None;
    }

    for _ in 0..iterations.max(1) {
        let mut scratch = root_board.clone();
        let mut current = 0;

        // Selection
        while nodes[current].untried.is_empty() && !nodes[current].children.is_empty() {
            let parent_visits = nodes[current].visits;
            let mut best_child = nodes[current].children[0];
            let mut best_value = f64::NEG_INFINITY;
            for &child in &nodes[current].children {
                let value = nodes[child].ucb1(parent_visits);
                if value > best_value {
                    best_value = value;
                    best_child = child;
                }
            }
            current = best_child;
            if let Some(mv) = nodes[current].mv {
                scratch.make_move(mv);
            }
        }

        // Expansion
        if !nodes[current].untried.is_empty() {
            let pick = rng.random_range(0..nodes[current].untried.len());
            let mv = nodes[current].untried.swap_remove(pick);
            let mover = scratch.side_to_move();
            scratch.make_move(mv);

            let child = nodes.len();
            nodes.push(Node::new(Some(mv), Some(current), mover, &scratch));
            nodes[current].children.push(child);
            current = child;
        }

        // Playout
        let winner = random_playout(&mut scratch, rng);

        // Backpropagation
        let mut cursor = Some(current);
        while let Some(index) = cursor {
            let node = &mut nodes[index];
            node.visits += 1;
            node.wins += playout_score(winner, node.just_moved);
            cursor = node.parent;
        }
    }

    let root = &nodes[0];
    let mut best: Option<(u32, Move)> = None;
    for &child in &root.children {
        let node = &nodes[child];
        let Some(mv) = node.mv else { continue };
        match best {
            Some((visits, _)) if node.visits <= visits => {}
            _ => best = Some((node.visits, mv)),
        }
    }

    if let Some((visits, mv)) = best {
        debug!(
            "[AI] mcts for {}: {} iterations, {} root children, chose {} ({} visits)",
            side,
            iterations,
            root.children.len(),
            mv,
            visits
        );
    }

    best.map(|(_, mv)| mv)
}
