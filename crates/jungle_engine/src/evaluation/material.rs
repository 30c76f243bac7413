//! Material evaluation
//!
//! Sums base attack ranks. Trap neutralization only matters for combat, so a trapped piece still
//! counts at full value here.

use crate::board::Board;
use crate::constants::ATTACK_WEIGHT;
use crate::types::*;

/// Material balance from `side`'s point of view
pub fn evaluate_material(board: &Board, side: Side) -> i32 {
    board
        .pieces()
        .map(|piece| {
            let value = piece.attack() as i32 * ATTACK_WEIGHT;
            if piece.side == side {
                value
            } else {
                -value
            }
        })
        .sum()
}
