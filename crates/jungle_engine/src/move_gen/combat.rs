//! Capture resolution
//!
//! Decides whether one piece may take another. The rules, in priority order:
//!
//! 1. A Rat always beats an Elephant
//! 2. An Elephant never beats a Rat
//! 3. Otherwise the attacker wins when its effective attack is at least the defender's
//!
//! "Effective" attack is the base rank, except that a piece standing on one of its opponent's
//! traps is worth 0 in every comparison. So anything can take a trapped piece, and a trapped
//! piece can only take other trapped pieces.
//!
//! Terrain restrictions (a Rat leaving the river, etc.) are **not** part of this module; see
//! `move_gen.rs` for those.

use crate::board::Board;
use crate::types::*;

/// Attack rank of `piece` where it stands: 0 on an opposing trap, the base rank elsewhere
pub fn effective_attack(board: &Board, piece: &Piece) -> u8 {
    if board.is_trap_of(piece.position, piece.side.opponent()) {
        0
    } else {
        piece.attack()
    }
}

/// Whether `attacker` may capture `defender`
///
/// Does not check sides: callers only ask about opposing pieces.
pub fn can_defeat(board: &Board, attacker: &Piece, defender: &Piece) -> bool {
    match (attacker.kind, defender.kind) {
        (Kind::Rat, Kind::Elephant) => true,
        (Kind::Elephant, Kind::Rat) => false,
        _ => effective_attack(board, attacker) >= effective_attack(board, defender),
    }
}

/// Kinds worth chasing for the path search: strictly weaker ones, plus the Elephant for a Rat
///
/// Based on ranks only. Terrain is ignored because the target will have moved by the time the
/// hunter arrives.
pub fn outranks(hunter: Kind, prey: Kind) -> bool {
    match (hunter, prey) {
        (Kind::Rat, Kind::Elephant) => true,
        (Kind::Elephant, Kind::Rat) => false,
        _ => hunter.attack() > prey.attack(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(board: &Board, col: i8, row: i8) -> Piece {
        *board
            .piece_at(Position::new(col, row))
            .expect("test setup places a piece here")
    }

    #[test]
    fn test_rank_order_and_equal_ranks() {
        let mut board = Board::empty();
        board.place(Kind::Lion, Side::Dark, Position::new(3, 3));
        board.place(Kind::Tiger, Side::Light, Position::new(3, 4));
        board.place(Kind::Lion, Side::Light, Position::new(6, 4));

        let lion = piece(&board, 3, 3);
        let tiger = piece(&board, 3, 4);
        let other_lion = piece(&board, 6, 4);

        assert!(can_defeat(&board, &lion, &tiger));
        assert!(!can_defeat(&board, &tiger, &lion));
        assert!(can_defeat(&board, &lion, &other_lion), "equal ranks trade");
    }

    #[test]
    fn test_rat_elephant_exception() {
        let mut board = Board::empty();
        board.place(Kind::Rat, Side::Light, Position::new(0, 4));
        board.place(Kind::Elephant, Side::Dark, Position::new(0, 3));

        let rat = piece(&board, 0, 4);
        let elephant = piece(&board, 0, 3);

        assert!(can_defeat(&board, &rat, &elephant));
        assert!(!can_defeat(&board, &elephant, &rat));
    }

    #[test]
    fn test_trapped_piece_is_worth_nothing() {
        let mut board = Board::empty();
        // Dark Elephant sits on one of Light's traps
        board.place(Kind::Elephant, Side::Dark, Position::new(3, 7));
        board.place(Kind::Cat, Side::Light, Position::new(3, 6));

        let elephant = piece(&board, 3, 7);
        let cat = piece(&board, 3, 6);

        assert_eq!(effective_attack(&board, &elephant), 0);
        assert!(can_defeat(&board, &cat, &elephant));
        assert!(!can_defeat(&board, &elephant, &cat));
    }

    #[test]
    fn test_own_trap_does_not_weaken() {
        let mut board = Board::empty();
        board.place(Kind::Wolf, Side::Light, Position::new(3, 7));
        let wolf = piece(&board, 3, 7);
        assert_eq!(effective_attack(&board, &wolf), 4);
    }

    #[test]
    fn test_outranks_is_strict() {
        assert!(outranks(Kind::Lion, Kind::Tiger));
        assert!(!outranks(Kind::Lion, Kind::Lion));
        assert!(outranks(Kind::Rat, Kind::Elephant));
        assert!(!outranks(Kind::Elephant, Kind::Rat));
        assert!(!outranks(Kind::Cat, Kind::Dog));
    }
}
