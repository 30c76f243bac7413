//! Game state queries and AI move generation
//!
//! Functions for querying game state and generating AI moves.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::search::{find_best_move, mcts_search, PathStrategy};
use crate::status::{self, GameStatus, Outcome};
use crate::types::{Move, Side};

/// Get current game state (in progress or won)
pub fn game_status(board: &Board) -> GameStatus {
    status::game_status(board)
}

/// Winner and reason, if the game is over
pub fn game_outcome(board: &Board) -> Option<Outcome> {
    status::game_outcome(board)
}

/// Get the AI's move for `side`: minimax to `depth`, ties broken by BFS path search
///
/// Returns `None` when `side` has no legal move or the game is over.
pub fn choose_ai_move(board: &Board, side: Side, depth: u32) -> Option<Move> {
    let mut rng = StdRng::from_os_rng();
    choose_ai_move_with_rng(board, side, depth, PathStrategy::BreadthFirst, &mut rng)
}

/// [`choose_ai_move`] with an explicit path strategy and random source
pub fn choose_ai_move_with_rng<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    depth: u32,
    strategy: PathStrategy,
    rng: &mut R,
) -> Option<Move> {
    find_best_move(board, side, depth, strategy, rng)
}

/// Get the AI's move for `side` by Monte Carlo tree search
pub fn choose_mcts_move(board: &Board, side: Side, iterations: u32) -> Option<Move> {
    let mut rng = StdRng::from_os_rng();
    choose_mcts_move_with_rng(board, side, iterations, &mut rng)
}

/// [`choose_mcts_move`] with an explicit random source
pub fn choose_mcts_move_with_rng<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    iterations: u32,
    rng: &mut R,
) -> Option<Move> {
    mcts_search(board, side, iterations, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{apply_move, legal_moves, new_game};

    #[test]
    fn test_ai_reply_is_legal() {
        let mut board = new_game();
        let mv = choose_ai_move(&board, Side::Light, 2).expect("opening has moves");
        assert!(legal_moves(&board, Side::Light).contains(&mv));
        apply_move(&mut board, mv.from, mv.to).expect("AI move is legal");
        assert_eq!(game_status(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_seeded_ai_is_reproducible() {
        let board = new_game();
        let pick = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            choose_ai_move_with_rng(&board, Side::Light, 2, PathStrategy::AStar, &mut rng)
        };
        assert_eq!(pick(11), pick(11));
    }

    #[test]
    fn test_mcts_reply_is_legal() {
        let board = new_game();
        let mut rng = StdRng::seed_from_u64(5);
        let mv = choose_mcts_move_with_rng(&board, Side::Light, 30, &mut rng).expect("moves");
        assert!(legal_moves(&board, Side::Light).contains(&mv));
    }
}
