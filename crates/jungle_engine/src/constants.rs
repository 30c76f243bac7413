//! # Jungle Engine Constants - Board Layout, Scores & Search Parameters
//!
//! ## Overview
//!
//! This module centralizes every fixed value of the game: the 7×9 board geometry, the terrain map
//! (rivers, traps, dens), the standard starting layout, the static evaluation weights and the search
//! tuning parameters. The board size and piece set are hard-coded to this one game; nothing here is
//! meant to be configured at runtime.
//!
//! ## Coordinate System
//!
//! Positions are `(col, row)` pairs with `col` in `0..7` and `row` in `0..9`. Dark's home rows are
//! 0-2 (den at the top edge), Light's home rows are 6-8 (den at the bottom edge):
//!
//! ```text
//!        a  b  c  d  e  f  g
//!   1    l  .  #  @  #  .  t      row 0   (Dark)
//!   2    .  d  .  #  .  c  .      row 1
//!   3    r  .  p  .  w  .  e      row 2
//!   4    .  ~  ~  .  ~  ~  .      row 3
//!   5    .  ~  ~  .  ~  ~  .      row 4
//!   6    .  ~  ~  .  ~  ~  .      row 5
//!   7    E  .  W  .  P  .  R      row 6
//!   8    .  C  .  #  .  D  .      row 7
//!   9    T  .  #  @  #  .  L      row 8   (Light)
//! ```
//!
//! (lowercase = Dark, uppercase = Light, `#` = trap, `@` = den, `~` = river.)
//!
//! ## Evaluation Weights
//!
//! A piece is worth `attack * ATTACK_WEIGHT` points and an invaded den is worth `DEN_SCORE`. The den
//! bonus is larger than the whole material of one side (`(1+..+8) * 10 = 360`) so that any line that
//! reaches a den dominates any material gain.

use super::types::{Kind, Position, Side};

/// Number of columns on the board
pub const WIDTH: i8 = 7;

/// Number of rows on the board
pub const HEIGHT: i8 = 9;

/// Total number of cells (7 × 9)
pub const CELL_COUNT: usize = (WIDTH as usize) * (HEIGHT as usize);

/// The 12 river cells, two 2×3 blocks flanking the center column
pub const RIVER_CELLS: [Position; 12] = [
    Position::new(1, 3),
    Position::new(2, 3),
    Position::new(1, 4),
    Position::new(2, 4),
    Position::new(1, 5),
    Position::new(2, 5),
    Position::new(4, 3),
    Position::new(5, 3),
    Position::new(4, 4),
    Position::new(5, 4),
    Position::new(4, 5),
    Position::new(5, 5),
];

pub const DARK_TRAPS: [Position; 3] = [
    Position::new(2, 0),
    Position::new(4, 0),
    Position::new(3, 1),
];

pub const LIGHT_TRAPS: [Position; 3] = [
    Position::new(2, 8),
    Position::new(4, 8),
    Position::new(3, 7),
];

pub const DARK_DEN: Position = Position::new(3, 0);
pub const LIGHT_DEN: Position = Position::new(3, 8);

/// Standard starting layout: 8 pieces per side
pub const SETUP: [(Kind, Side, Position); 16] = [
    (Kind::Lion, Side::Dark, Position::new(0, 0)),
    (Kind::Tiger, Side::Dark, Position::new(6, 0)),
    (Kind::Dog, Side::Dark, Position::new(1, 1)),
    (Kind::Cat, Side::Dark, Position::new(5, 1)),
    (Kind::Rat, Side::Dark, Position::new(0, 2)),
    (Kind::Leopard, Side::Dark, Position::new(2, 2)),
    (Kind::Wolf, Side::Dark, Position::new(4, 2)),
    (Kind::Elephant, Side::Dark, Position::new(6, 2)),
    (Kind::Lion, Side::Light, Position::new(6, 8)),
    (Kind::Tiger, Side::Light, Position::new(0, 8)),
    (Kind::Dog, Side::Light, Position::new(5, 7)),
    (Kind::Cat, Side::Light, Position::new(1, 7)),
    (Kind::Rat, Side::Light, Position::new(6, 6)),
    (Kind::Leopard, Side::Light, Position::new(4, 6)),
    (Kind::Wolf, Side::Light, Position::new(2, 6)),
    (Kind::Elephant, Side::Light, Position::new(0, 6)),
];

/// Light always opens the game
pub const FIRST_TO_MOVE: Side = Side::Light;

// Evaluation

/// Bonus (or malus) for an invaded den
pub const DEN_SCORE: i32 = 900;

/// Points per attack rank of a live piece
pub const ATTACK_WEIGHT: i32 = 10;

// Search

/// Alpha-beta window bound (never reached by a real evaluation)
pub const AB_INF: i32 = i32::MAX / 2;

/// Default minimax depth in plies
pub const DEFAULT_SEARCH_DEPTH: u32 = 2;

/// Hard cap on requested minimax depth
pub const MAX_SEARCH_DEPTH: u32 = 6;

/// Attack value credited to the empty opponent den by the A* target bonus
pub const DEN_TARGET_ATTACK: i32 = 10;

/// Cost of one step for the A* path search
pub const PATH_STEP_COST: i32 = 10;

/// Default number of Monte Carlo iterations
pub const DEFAULT_MCTS_ITERATIONS: u32 = 400;

/// Random playouts are cut off (and scored as a draw) after this many plies
pub const MAX_PLAYOUT_PLIES: usize = 200;

/// UCB1 exploration constant (√2)
pub const UCB1_EXPLORATION: f64 = std::f64::consts::SQRT_2;

/// Number of identical own moves (at stride 4 plies) that triggers the repetition ban
pub const REPETITION_COUNT: usize = 3;
