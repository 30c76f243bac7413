//! Move history tracking
//!
//! The engine's board keeps a bare list of moves for the repetition rule. The session keeps this
//! richer record for display and for undo, since undoing a move needs the `CaptureRecord` the
//! engine returned when it was played.

use std::fmt;

use jungle_engine::{CaptureRecord, Kind, Move, Side};

/// One played move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub side: Side,
    pub kind: Kind,
    pub mv: Move,
    /// Kind of the piece taken, if any
    pub captured: Option<Kind>,
    /// Undo information from the engine
    pub record: CaptureRecord,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.side, self.kind, self.mv)?;
        if let Some(captured) = self.captured {
            write!(f, " x{}", captured)?;
        }
        Ok(())
    }
}

/// Chronological list of all moves in the current game
#[derive(Debug, Default, Clone)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    /// Remove and return the most recent move
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.moves.pop()
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    /// Number of plies played
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jungle_engine::Position;

    fn record(side: Side, captured: Option<Kind>) -> MoveRecord {
        MoveRecord {
            side,
            kind: Kind::Dog,
            mv: Move::new(Position::new(5, 7), Position::new(5, 6)),
            captured,
            record: CaptureRecord::default(),
        }
    }

    #[test]
    fn test_push_pop_order() {
        let mut history = MoveHistory::default();
        assert!(history.is_empty());

        history.add_move(record(Side::Light, None));
        history.add_move(record(Side::Dark, Some(Kind::Cat)));
        assert_eq!(history.len(), 2);
        assert_eq!(history.last_move().map(|m| m.side), Some(Side::Dark));

        assert_eq!(history.pop().map(|m| m.side), Some(Side::Dark));
        assert_eq!(history.pop().map(|m| m.side), Some(Side::Light));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(record(Side::Light, None).to_string(), "Light Dog f8-f7");
        assert_eq!(
            record(Side::Dark, Some(Kind::Cat)).to_string(),
            "Dark Dog f8-f7 xCat"
        );
    }
}
