//! Captured pieces tracking
//!
//! Tracks pieces captured by each side and the material balance, measured in attack units
//! (Rat 1 .. Elephant 8).
//!
//! # Material Advantage
//!
//! Positive means Light is ahead, negative means Dark is ahead. If Light took a Tiger (6) and a
//! Rat (1) while Dark took a Wolf (4), Light's advantage is (6 + 1) - 4 = +3.

use jungle_engine::{Kind, Side};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CapturedPieces {
    /// Dark pieces taken by Light
    pub light_captured: Vec<Kind>,
    /// Light pieces taken by Dark
    pub dark_captured: Vec<Kind>,
}

impl CapturedPieces {
    /// Record that a piece of `captured_side` was taken
    pub fn add_capture(&mut self, captured_side: Side, kind: Kind) {
        match captured_side {
            Side::Light => self.dark_captured.push(kind),
            Side::Dark => self.light_captured.push(kind),
        }
    }

    /// Take back the most recent capture of a `captured_side` piece
    pub fn undo_capture(&mut self, captured_side: Side) -> Option<Kind> {
        match captured_side {
            Side::Light => self.dark_captured.pop(),
            Side::Dark => self.light_captured.pop(),
        }
    }

    /// Pieces `side` has taken
    pub fn taken_by(&self, side: Side) -> &[Kind] {
        match side {
            Side::Light => &self.light_captured,
            Side::Dark => &self.dark_captured,
        }
    }

    pub fn material_advantage(&self) -> i32 {
        let light: i32 = self.light_captured.iter().map(|k| k.attack() as i32).sum();
        let dark: i32 = self.dark_captured.iter().map(|k| k.attack() as i32).sum();
        light - dark
    }

    pub fn clear(&mut self) {
        self.light_captured.clear();
        self.dark_captured.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_pieces_default() {
        let captured = CapturedPieces::default();
        assert!(captured.taken_by(Side::Light).is_empty());
        assert!(captured.taken_by(Side::Dark).is_empty());
        assert_eq!(captured.material_advantage(), 0);
    }

    #[test]
    fn test_credit_goes_to_the_capturer() {
        let mut captured = CapturedPieces::default();
        captured.add_capture(Side::Dark, Kind::Tiger);

        assert_eq!(captured.taken_by(Side::Light), &[Kind::Tiger]);
        assert!(captured.taken_by(Side::Dark).is_empty());
    }

    #[test]
    fn test_material_advantage() {
        //! Light takes Tiger (6) and Rat (1), Dark takes Wolf (4)
        let mut captured = CapturedPieces::default();
        captured.add_capture(Side::Dark, Kind::Tiger);
        captured.add_capture(Side::Dark, Kind::Rat);
        captured.add_capture(Side::Light, Kind::Wolf);

        assert_eq!(captured.material_advantage(), 3);
    }

    #[test]
    fn test_undo_and_clear() {
        let mut captured = CapturedPieces::default();
        captured.add_capture(Side::Light, Kind::Elephant);
        captured.add_capture(Side::Dark, Kind::Cat);

        assert_eq!(captured.undo_capture(Side::Light), Some(Kind::Elephant));
        assert_eq!(captured.material_advantage(), 2);

        captured.clear();
        assert_eq!(captured, CapturedPieces::default());
    }
}
