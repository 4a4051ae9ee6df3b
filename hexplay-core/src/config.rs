//! Game configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::board::{Player, MIN_BOARD_SIZE};
use crate::error::ConfigError;
use crate::eval::EvalWeights;
use crate::search::DEFAULT_DEPTH;

/// Settings for a human-vs-computer game
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board side length
    pub board_size: usize,
    /// Alpha-beta search depth
    pub depth: u32,
    /// Side played by the computer
    pub ai_player: Player,
    /// Whether the human moves first
    pub human_first: bool,
    /// Evaluation weights
    pub weights: EvalWeights,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 7,
            depth: DEFAULT_DEPTH,
            ai_player: Player::Blue,
            human_first: true,
            weights: EvalWeights::default(),
        }
    }
}

impl GameConfig {
    /// Load from a JSON file, filling missing fields with defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall {
                size: self.board_size,
                min: MIN_BOARD_SIZE,
            });
        }
        Ok(())
    }

    pub fn human_player(&self) -> Player {
        self.ai_player.opponent()
    }

    pub fn first_player(&self) -> Player {
        if self.human_first {
            self.human_player()
        } else {
            self.ai_player
        }
    }

    /// Build the (human, computer) agents
    pub fn agents(&self) -> (Agent, Agent) {
        (
            Agent::human(self.human_player()),
            Agent::search(self.ai_player, self.depth, self.weights.clone()),
        )
    }
}
