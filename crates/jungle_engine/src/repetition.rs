//! Anti-shuffling rule
//!
//! A side that keeps moving one piece back and forth between two cells is eventually forbidden
//! to play the return move. Looking only at the side to move's own moves, newest first
//! (`m0 = h[n-2]`, `m1 = h[n-4]`, ... `m4 = h[n-10]`):
//!
//! ```text
//! m0 == m2 == m4  and  m1 == m3 == reverse(m0)   =>   reverse(m0) is forbidden
//! ```
//!
//! In other words the same move was played three times at a stride of four plies, interleaved
//! with its reverse. The ban is recomputed after every make and undo, so it lifts as soon as any
//! other move breaks the pattern.

use crate::constants::REPETITION_COUNT;
use crate::types::Move;

/// The move the side to move may not play after `history`, if any
pub(crate) fn forbidden_move(history: &[Move]) -> Option<Move> {
    shuttle_ban(history, 2)
}

/// The ban for the side that made the last move of `history`
///
/// Only needed when a custom setup hands the turn back to that side.
pub(crate) fn forbidden_move_for_last_mover(history: &[Move]) -> Option<Move> {
    shuttle_ban(history, 1)
}

/// `newest` is how many plies back the side's latest own move sits (1 or 2)
fn shuttle_ban(history: &[Move], newest: usize) -> Option<Move> {
    let own_moves = 2 * REPETITION_COUNT - 1;
    let n = history.len();
    if n < 2 * own_moves {
        return None;
    }

    // Own moves of the side in question, newest first
    let own = (0..own_moves).map(|i| history[n - newest - 2 * i]);

    let shuttle = history[n - newest];
    let back = shuttle.reversed();
    let repeated = own
        .enumerate()
        .all(|(i, mv)| if i % 2 == 0 { mv == shuttle } else { mv == back });

    repeated.then_some(back)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    fn mv(from: (i8, i8), to: (i8, i8)) -> Move {
        Move::new(Position::new(from.0, from.1), Position::new(to.0, to.1))
    }

    /// Ten plies: Light shuttles a→b→a→b→a→b, Dark plays distinct moves in between
    fn shuttle_history() -> Vec<Move> {
        let forth = mv((0, 6), (0, 5));
        let back = forth.reversed();
        let mut history = Vec::new();
        for (i, own) in [forth, back, forth, back, forth].into_iter().enumerate() {
            history.push(own);
            history.push(mv((i as i8, 0), (i as i8, 1)));
        }
        history
    }

    #[test]
    fn test_short_history_has_no_ban() {
        assert_eq!(forbidden_move(&[]), None);
        let history = shuttle_history();
        assert_eq!(forbidden_move(&history[..9]), None);
    }

    #[test]
    fn test_shuttle_forbids_return_move() {
        let history = shuttle_history();
        assert_eq!(forbidden_move(&history), Some(mv((0, 5), (0, 6))));
    }

    #[test]
    fn test_broken_pattern_lifts_ban() {
        let mut history = shuttle_history();
        history[4] = mv((3, 6), (3, 5));
        assert_eq!(forbidden_move(&history), None);
    }

    #[test]
    fn test_opponent_pattern_is_ignored_for_side_to_move() {
        // Shift by one ply: now the shuttle belongs to the side that just moved
        let mut history = vec![mv((6, 0), (6, 1))];
        history.extend(shuttle_history());
        history.pop();
        assert_eq!(forbidden_move(&history), None);
    }

    #[test]
    fn test_last_mover_pattern_found_when_asked_for() {
        let mut history = vec![mv((6, 0), (6, 1))];
        history.extend(shuttle_history());
        history.pop();
        assert_eq!(
            forbidden_move_for_last_mover(&history),
            Some(mv((0, 5), (0, 6)))
        );
        assert_eq!(forbidden_move_for_last_mover(&shuttle_history()), None);
    }
}
