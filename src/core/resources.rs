//! Persisted user preferences
//!
//! [`GameSettings`] is what `settings.json` holds. The CLI parses into the same small enums so
//! flags can override individual fields.

use clap::ValueEnum;
use jungle_engine::constants::DEFAULT_MCTS_ITERATIONS;
use jungle_engine::Side;
use serde::{Deserialize, Serialize};

use crate::game::ai::{AiChooser, AiConfig, AiDifficulty, GameMode};

/// Default ply limit for computer-vs-computer games
pub const DEFAULT_MAX_PLIES: u32 = 300;

/// User preferences saved between runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub mode: ModeChoice,
    pub ai_side: SideChoice,
    pub difficulty: AiDifficulty,
    pub chooser: ChooserChoice,
    pub mcts_iterations: u32,
    pub max_plies: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mode: ModeChoice::Pvc,
            ai_side: SideChoice::Dark,
            difficulty: AiDifficulty::Medium,
            chooser: ChooserChoice::Minimax,
            mcts_iterations: DEFAULT_MCTS_ITERATIONS,
            max_plies: DEFAULT_MAX_PLIES,
        }
    }
}

impl GameSettings {
    pub fn game_mode(&self) -> GameMode {
        match self.mode {
            ModeChoice::Pvp => GameMode::PvP,
            ModeChoice::Pvc => GameMode::PvC {
                ai_side: self.ai_side.into(),
            },
            ModeChoice::Cvc => GameMode::CvC,
        }
    }

    pub fn ai_chooser(&self) -> AiChooser {
        match self.chooser {
            ChooserChoice::Minimax => AiChooser::Minimax,
            ChooserChoice::Mcts => AiChooser::MonteCarlo {
                iterations: self.mcts_iterations.max(1),
            },
        }
    }

    /// The AI configuration these settings describe
    pub fn ai_config(&self) -> AiConfig {
        AiConfig {
            mode: self.game_mode(),
            difficulty: self.difficulty,
            chooser: self.ai_chooser(),
            ..AiConfig::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModeChoice {
    /// Two humans at one keyboard
    Pvp,
    /// Human against the computer
    Pvc,
    /// Computer against itself
    Cvc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SideChoice {
    Dark,
    Light,
}

impl From<SideChoice> for Side {
    fn from(choice: SideChoice) -> Self {
        match choice {
            SideChoice::Dark => Side::Dark,
            SideChoice::Light => Side::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChooserChoice {
    /// Minimax with alpha-beta and path-search tie-breaking
    Minimax,
    /// Monte Carlo tree search
    Mcts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = GameSettings::default();
        assert_eq!(
            settings.game_mode(),
            GameMode::PvC {
                ai_side: Side::Dark
            }
        );
        assert_eq!(settings.ai_chooser(), AiChooser::Minimax);
        assert_eq!(settings.ai_config().difficulty.search_depth(), 2);
    }

    #[test]
    fn test_mcts_iterations_never_zero() {
        let settings = GameSettings {
            chooser: ChooserChoice::Mcts,
            mcts_iterations: 0,
            ..GameSettings::default()
        };
        assert_eq!(settings.ai_chooser(), AiChooser::MonteCarlo { iterations: 1 });
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: GameSettings =
            serde_json::from_str(r#"{ "mode": "cvc", "difficulty": "hard" }"#).expect("parse");
        assert_eq!(settings.game_mode(), GameMode::CvC);
        assert_eq!(settings.difficulty, AiDifficulty::Hard);
        assert_eq!(settings.max_plies, DEFAULT_MAX_PLIES);
    }
}
