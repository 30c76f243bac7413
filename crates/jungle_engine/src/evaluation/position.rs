//! Full position evaluation

use super::material::evaluate_material;
use crate::board::Board;
use crate::constants::DEN_SCORE;
use crate::status::den_invaded_by;
use crate::types::Side;

/// Evaluate `board` for `side` (positive is good for `side`)
pub fn evaluate(board: &Board, side: Side) -> i32 {
    let mut score = evaluate_material(board, side);

    if den_invaded_by(board, side) {
        score += DEN_SCORE;
    }
    if den_invaded_by(board, side.opponent()) {
        score -= DEN_SCORE;
    }

    score
}
