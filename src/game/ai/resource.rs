//! AI configuration: game mode, difficulty, chooser
//!
//! # Game Modes
//!
//! - **PvP**: Two human players (local hot-seat)
//! - **PvC**: One human against the computer (specify which side the AI plays)
//! - **CvC**: Computer against computer, bounded by a ply limit
//!
//! # Difficulty Levels
//!
//! Difficulty maps directly to minimax search depth:
//!
//! | Difficulty | Depth |
//! |------------|-------|
//! | Easy       | 1 ply |
//! | Medium     | 2 ply |
//! | Hard       | 3 ply |
//!
//! Difficulty has no effect on the Monte Carlo chooser, which is tuned by its iteration count.

use clap::ValueEnum;
use jungle_engine::{PathStrategy, Side};
use serde::{Deserialize, Serialize};

/// Who controls which side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Human vs human
    PvP,

    /// Human vs AI; the AI plays `ai_side`
    PvC { ai_side: Side },

    /// AI vs AI
    CvC,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvC {
            ai_side: Side::Dark,
        }
    }
}

impl GameMode {
    /// Whether the AI plays `side` in this mode
    pub fn is_ai_controlled(self, side: Side) -> bool {
        match self {
            GameMode::PvP => false,
            GameMode::PvC { ai_side } => ai_side == side,
            GameMode::CvC => true,
        }
    }
}

/// AI difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AiDifficulty {
    /// Depth 1: grabs whatever is free right now
    Easy,

    /// Depth 2: sees the opponent's immediate reply
    Medium,

    /// Depth 3
    Hard,
}

impl AiDifficulty {
    /// Minimax search depth in plies
    pub fn search_depth(self) -> u32 {
        match self {
            AiDifficulty::Easy => 1,
            AiDifficulty::Medium => 2,
            AiDifficulty::Hard => 3,
        }
    }
}

/// Which algorithm picks the AI move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiChooser {
    #[default]
    Minimax,
    MonteCarlo { iterations: u32 },
}

/// Everything the session needs to know to run the AI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiConfig {
    pub mode: GameMode,
    pub difficulty: AiDifficulty,
    pub chooser: AiChooser,
    /// Path search used to break minimax ties
    pub strategy: PathStrategy,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: AiDifficulty::Medium,
            chooser: AiChooser::Minimax,
            strategy: PathStrategy::BreadthFirst,
        }
    }
}
