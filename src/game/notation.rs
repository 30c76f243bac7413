//! Square names
//!
//! Columns are letters `a`..`g` from the left, rows are numbers `1`..`9` from the Dark side, so
//! the Dark den is `d1` and the Light den is `d9`. This is the same format `Position` displays.

use jungle_engine::constants::{HEIGHT, WIDTH};
use jungle_engine::Position;

use crate::game::error::{GameError, GameResult};

/// Parse a square such as `b8`
pub fn parse_position(input: &str) -> GameResult<Position> {
    let invalid = || GameError::InvalidNotation {
        input: input.to_string(),
    };

    let trimmed = input.trim().to_ascii_lowercase();
    let mut chars = trimmed.chars();
    let file = chars.next().ok_or_else(invalid)?;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let rank: i8 = digits.parse().map_err(|_| invalid())?;

    if !file.is_ascii_lowercase() {
        return Err(invalid());
    }
    let col = (file as u8 - b'a') as i8;
    let row = rank - 1;

    if !(0..WIDTH).contains(&col) || !(0..HEIGHT).contains(&row) {
        return Err(invalid());
    }
    Ok(Position::new(col, row))
}

/// Parse `"<from> <to>"`
pub fn parse_move(from: &str, to: &str) -> GameResult<(Position, Position)> {
    Ok((parse_position(from)?, parse_position(to)?))
}
