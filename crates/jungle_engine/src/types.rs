//! # Jungle Engine Core Types
//!
//! ## Overview
//!
//! This module defines the value types every other module works with:
//!
//! 1. **`Position`** - a `(col, row)` pair on the 7×9 grid
//! 2. **`Side`** / **`Kind`** / **`Piece`** - who owns a piece, what animal it is, where it stands
//! 3. **`Terrain`** - the immutable label of a cell (empty, river, trap, den)
//! 4. **`Move`** / **`CaptureRecord`** - a `(from, to)` pair and the undo information it produced
//!
//! All of them are small `Copy` values. The board (see `board.rs`) is the only mutable aggregate;
//! everything here is plain data.
//!
//! ## One Piece Type, Eight Kinds
//!
//! The eight animals differ only in their attack rank and in three movement exceptions:
//!
//! | Kind     | Attack | Swims | Leaps rivers |
//! |----------|--------|-------|--------------|
//! | Rat      | 1      | yes   | no           |
//! | Cat      | 2      | no    | no           |
//! | Dog      | 3      | yes   | no           |
//! | Wolf     | 4      | no    | no           |
//! | Leopard  | 5      | no    | no           |
//! | Tiger    | 6      | no    | yes          |
//! | Lion     | 7      | no    | yes          |
//! | Elephant | 8      | no    | no           |
//!
//! Rather than one type per animal, a single [`Piece`] carries a [`Kind`] and the movement code
//! matches on it (see `move_gen.rs`). The Rat/Elephant exception lives in `move_gen/combat.rs`.

use std::fmt;

use super::constants::{HEIGHT, WIDTH};

/// A cell coordinate: `col` in `0..7`, `row` in `0..9`
///
/// Positions outside the grid can be constructed (e.g. by stepping off an edge) and must be
/// checked with [`Position::is_in_board`] before any cell lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub col: i8,
    pub row: i8,
}

impl Position {
    pub const fn new(col: i8, row: i8) -> Self {
        Position { col, row }
    }

    #[inline]
    pub fn is_in_board(self) -> bool {
        self.col >= 0 && self.col < WIDTH && self.row >= 0 && self.row < HEIGHT
    }

    /// Linear index into the cell array (row-major)
    ///
    /// Only meaningful for in-board positions.
    #[inline]
    pub fn index(self) -> usize {
        self.row as usize * WIDTH as usize + self.col as usize
    }

    /// Inverse of [`Position::index`]
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Position::new((index % WIDTH as usize) as i8, (index / WIDTH as usize) as i8)
    }

    /// The neighbouring position in `direction` (may be off the board)
    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        let (dc, dr) = direction.delta();
        Position::new(self.col + dc, self.row + dr)
    }

    /// Manhattan distance, used for debugging output and tests
    pub fn distance(self, other: Position) -> u32 {
        ((self.col - other.col).unsigned_abs() + (self.row - other.row).unsigned_abs()) as u32
    }
}

impl fmt::Display for Position {
    /// Column letter followed by the 1-based row, e.g. `(3, 8)` is `d9`
    ///
    /// Off-board positions have no square name and print as `(col, row)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_in_board() {
            return write!(f, "({}, {})", self.col, self.row);
        }
        let file = (b'a' + self.col as u8) as char;
        write!(f, "{}{}", file, self.row + 1)
    }
}

/// The four orthogonal directions. There are no diagonal moves in this game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// `(d_col, d_row)`; "up" is towards row 0
    #[inline]
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Dark,
    Light,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Dark, Side::Light];

    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Dark => Side::Light,
            Side::Light => Side::Dark,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Dark => write!(f, "Dark"),
            Side::Light => write!(f, "Light"),
        }
    }
}

/// The eight animals, ordered by attack rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Rat,
    Cat,
    Dog,
    Wolf,
    Leopard,
    Tiger,
    Lion,
    Elephant,
}

impl Kind {
    pub const ALL: [Kind; 8] = [
        Kind::Rat,
        Kind::Cat,
        Kind::Dog,
        Kind::Wolf,
        Kind::Leopard,
        Kind::Tiger,
        Kind::Lion,
        Kind::Elephant,
    ];

    /// Base attack rank, 1 (Rat) to 8 (Elephant)
    #[inline]
    pub fn attack(self) -> u8 {
        match self {
            Kind::Rat => 1,
            Kind::Cat => 2,
            Kind::Dog => 3,
            Kind::Wolf => 4,
            Kind::Leopard => 5,
            Kind::Tiger => 6,
            Kind::Lion => 7,
            Kind::Elephant => 8,
        }
    }

    /// Swimmers may step onto river cells
    #[inline]
    pub fn can_swim(self) -> bool {
        matches!(self, Kind::Rat | Kind::Dog)
    }

    /// Leapers may jump straight across a river
    #[inline]
    pub fn can_leap(self) -> bool {
        matches!(self, Kind::Lion | Kind::Tiger)
    }

    pub fn name(self) -> &'static str {
        match self {
            Kind::Rat => "Rat",
            Kind::Cat => "Cat",
            Kind::Dog => "Dog",
            Kind::Wolf => "Wolf",
            Kind::Leopard => "Leopard",
            Kind::Tiger => "Tiger",
            Kind::Lion => "Lion",
            Kind::Elephant => "Elephant",
        }
    }

    /// Single-letter symbol used by text boards (`R`at, `C`at, `D`og, `W`olf, le`P`ard, `T`iger,
    /// `L`ion, `E`lephant)
    pub fn symbol(self) -> char {
        match self {
            Kind::Rat => 'R',
            Kind::Cat => 'C',
            Kind::Dog => 'D',
            Kind::Wolf => 'W',
            Kind::Leopard => 'P',
            Kind::Tiger => 'T',
            Kind::Lion => 'L',
            Kind::Elephant => 'E',
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A live piece. `position` is a cache of the owning cell's position, written only by
/// `Cell::add_piece`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: Kind,
    pub side: Side,
    pub position: Position,
}

impl Piece {
    pub fn new(kind: Kind, side: Side, position: Position) -> Self {
        Piece {
            kind,
            side,
            position,
        }
    }

    /// Base attack of the piece's kind (trap neutralization is applied by `move_gen::combat`)
    #[inline]
    pub fn attack(&self) -> u8 {
        self.kind.attack()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at {}", self.side, self.kind, self.position)
    }
}

/// Immutable label of a cell, assigned once when the board is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    Empty,
    River,
    Trap(Side),
    Den(Side),
}

/// A move from one cell to another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub const fn new(from: Position, to: Position) -> Self {
        Move { from, to }
    }

    /// The move going straight back
    #[inline]
    pub fn reversed(self) -> Self {
        Move::new(self.to, self.from)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Undo information produced by a move
///
/// `captured` holds the defender removed from the destination, if any. Passing the record back
/// to `Board::undo_move` restores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaptureRecord {
    pub captured: Option<Piece>,
}

impl CaptureRecord {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_names() {
        assert_eq!(Position::new(0, 0).to_string(), "a1");
        assert_eq!(Position::new(3, 8).to_string(), "d9");
        assert_eq!(Move::new(Position::new(5, 7), Position::new(5, 6)).to_string(), "f8-f7");
    }

    #[test]
    fn test_off_board_positions_print_as_coordinates() {
        assert_eq!(Position::new(-1, 0).to_string(), "(-1, 0)");
        assert_eq!(Position::new(7, 9).to_string(), "(7, 9)");
        assert_eq!(Position::new(0, -1).step(Direction::Left).to_string(), "(-1, -1)");
    }
}
