//! Board and cell model
//!
//! The board is the single source of truth for the game:
//! - A fixed 7×9 array of [`Cell`]s, each with an immutable [`Terrain`] and at most one piece
//! - The move history and the stack of captured pieces (written by `make_unmake.rs`)
//! - The side to move and the current forbidden move (see `repetition.rs`)
//!
//! Live pieces are not stored separately: they are read off the cells, so a piece's cached
//! `position` can never disagree with the cell that owns it.

use super::constants::*;
use super::types::*;
use crate::repetition::{forbidden_move, forbidden_move_for_last_mover};

/// One square of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    terrain: Terrain,
    position: Position,
    occupant: Option<Piece>,
}

impl Cell {
    fn new(terrain: Terrain, position: Position) -> Self {
        Cell {
            terrain,
            position,
            occupant: None,
        }
    }

    #[inline]
    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn piece(&self) -> Option<&Piece> {
        self.occupant.as_ref()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    #[inline]
    pub fn is_river(&self) -> bool {
        self.terrain == Terrain::River
    }

    #[inline]
    pub fn is_trap_of(&self, side: Side) -> bool {
        self.terrain == Terrain::Trap(side)
    }

    #[inline]
    pub fn is_den_of(&self, side: Side) -> bool {
        self.terrain == Terrain::Den(side)
    }

    pub fn is_occupied_by(&self, side: Side) -> bool {
        self.occupant.is_some_and(|piece| piece.side == side)
    }

    /// Place a piece on this cell and point its `position` here
    ///
    /// # Panics
    ///
    /// Panics if the cell is already occupied; two pieces can never share a cell.
    pub fn add_piece(&mut self, mut piece: Piece) {
        assert!(
            self.occupant.is_none(),
            "cell {} is already occupied by {:?}",
            self.position,
            self.occupant
        );
        piece.position = self.position;
        self.occupant = Some(piece);
    }

    /// Take the piece off this cell, if any
    pub fn remove_piece(&mut self) -> Option<Piece> {
        self.occupant.take()
    }
}

/// The whole game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
    side_to_move: Side,
    pub(crate) history: Vec<Move>,
    pub(crate) captured: Vec<(Position, Piece)>,
    pub(crate) forbidden: Option<Move>,
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl Board {
    /// A board with the fixed terrain and no pieces, Light to move
    ///
    /// Used to build custom positions: place pieces with [`Board::add_piece`].
    pub fn empty() -> Self {
        let mut cells = [Cell::new(Terrain::Empty, Position::new(0, 0)); CELL_COUNT];
        for (index, cell) in cells.iter_mut().enumerate() {
            let position = Position::from_index(index);
            *cell = Cell::new(terrain_at(position), position);
        }

        Board {
            cells,
            side_to_move: FIRST_TO_MOVE,
            history: Vec::new(),
            captured: Vec::new(),
            forbidden: None,
        }
    }

    /// The standard starting position with all 16 pieces
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for &(kind, side, position) in SETUP.iter() {
            board.add_piece(Piece::new(kind, side, position));
        }
        board
    }

    #[inline]
    pub fn is_in_board(position: Position) -> bool {
        position.is_in_board()
    }

    /// The cell at `position`
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside the board. Callers check [`Board::is_in_board`] first, or
    /// use [`Board::cell`] to probe.
    pub fn get_cell(&self, position: Position) -> &Cell {
        assert!(
            position.is_in_board(),
            "position ({}, {}) is outside the board",
            position.col,
            position.row
        );
        &self.cells[position.index()]
    }

    /// Checked variant of [`Board::get_cell`]
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        position
            .is_in_board()
            .then(|| &self.cells[position.index()])
    }

    fn get_cell_mut(&mut self, position: Position) -> &mut Cell {
        assert!(
            position.is_in_board(),
            "position ({}, {}) is outside the board",
            position.col,
            position.row
        );
        &mut self.cells[position.index()]
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    // Terrain predicates. All of them answer `false` off the board.

    pub fn is_river(&self, position: Position) -> bool {
        self.cell(position).is_some_and(Cell::is_river)
    }

    pub fn is_trap_of(&self, position: Position, side: Side) -> bool {
        self.cell(position).is_some_and(|cell| cell.is_trap_of(side))
    }

    pub fn is_den_of(&self, position: Position, side: Side) -> bool {
        self.cell(position).is_some_and(|cell| cell.is_den_of(side))
    }

    /// Position of `side`'s own den
    pub fn den_of(side: Side) -> Position {
        match side {
            Side::Dark => DARK_DEN,
            Side::Light => LIGHT_DEN,
        }
    }

    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.cell(position).and_then(Cell::piece)
    }

    /// Put `piece` on `position` (its cached position is overwritten)
    pub fn add_piece(&mut self, piece: Piece) {
        self.get_cell_mut(piece.position).add_piece(piece);
    }

    /// Convenience for custom setups
    pub fn place(&mut self, kind: Kind, side: Side, position: Position) {
        self.add_piece(Piece::new(kind, side, position));
    }

    pub fn remove_piece(&mut self, position: Position) -> Option<Piece> {
        self.get_cell_mut(position).remove_piece()
    }

    /// Move a piece between cells without any bookkeeping
    pub(crate) fn relocate(&mut self, from: Position, to: Position) -> Option<Piece> {
        let piece = self.remove_piece(from)?;
        let cell = self.get_cell_mut(to);
        cell.add_piece(piece);
        cell.piece().copied()
    }

    /// All live pieces, row by row
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.cells.iter().filter_map(Cell::piece)
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |piece| piece.side == side)
    }

    pub fn piece_count(&self, side: Side) -> usize {
        self.pieces_of(side).count()
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Override whose turn it is (custom setups only)
    ///
    /// The repetition ban is recomputed for `side`, which may be the side that just moved.
    pub fn set_side_to_move(&mut self, side: Side) {
        self.side_to_move = side;

        let last_mover = self
            .history
            .last()
            .and_then(|mv| self.piece_at(mv.to))
            .map(|piece| piece.side);
        self.forbidden = if last_mover == Some(side) {
            forbidden_move_for_last_mover(&self.history)
        } else {
            forbidden_move(&self.history)
        };
    }

    pub(crate) fn pass_turn_to(&mut self, side: Side) {
        self.side_to_move = side;
    }

    /// Every move made on this board, oldest first
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Captured pieces with the cell they were taken on, oldest first
    pub fn captured_pieces(&self) -> &[(Position, Piece)] {
        &self.captured
    }

    /// The move the side to move may not play because of the repetition rule
    pub fn forbidden_move(&self) -> Option<Move> {
        self.forbidden
    }
}

/// Fixed terrain map
fn terrain_at(position: Position) -> Terrain {
    if position == DARK_DEN {
        Terrain::Den(Side::Dark)
    } else if position == LIGHT_DEN {
        Terrain::Den(Side::Light)
    } else if DARK_TRAPS.contains(&position) {
        Terrain::Trap(Side::Dark)
    } else if LIGHT_TRAPS.contains(&position) {
        Terrain::Trap(Side::Light)
    } else if RIVER_CELLS.contains(&position) {
        Terrain::River
    } else {
        Terrain::Empty
    }
}
