//! Session configuration.
//!
//! Which side the computer plays, how long it waits before replying, which
//! move policy it uses and an optional seed for reproducible play. Loaded from
//! JSON; every field has a default so a partial document is valid.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Color;

/// How the computer picks its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum OpponentPolicy {
    /// Uniform over legal moves, or over captures when preferred and available.
    Random {
        #[serde(default)]
        prefer_captures: bool,
    },
    /// One-ply scored selection.
    #[default]
    Scored,
}

impl OpponentPolicy {
    /// Engine for this policy, seeded when `seed` is given.
    pub fn build_engine(self, seed: Option<u64>) -> Box<dyn Engine> {
        match (self, seed) {
            (OpponentPolicy::Random { prefer_captures }, Some(seed)) => {
                Box::new(RandomEngine::with_seed(seed, prefer_captures))
            }
            (OpponentPolicy::Random { prefer_captures }, None) => Box::new(RandomEngine::new(prefer_captures)),
            (OpponentPolicy::Scored, Some(seed)) => Box::new(GreedyEngine::with_seed(seed)),
            (OpponentPolicy::Scored, None) => Box::new(GreedyEngine::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Side played by the computer; `None` for two human players.
    pub computer_color: Option<Color>,
    /// Pause before the computer's reply, in milliseconds.
    pub reply_delay_ms: u64,
    pub opponent: OpponentPolicy,
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            computer_color: Some(Color::Black),
            reply_delay_ms: 1000,
            opponent: OpponentPolicy::default(),
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(text: &str) -> ChessResult<Self> {
        serde_json::from_str(text).map_err(|e| ChessError::InvalidConfig(e.to_string()))
    }

    pub fn load_from_path(path: &Path) -> ChessResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ChessError::InvalidConfig(format!("{}: {e}", path.display())))?;
        let config = Self::from_json_str(&contents)?;
        info!(path = %path.display(), ?config, "loaded session config");
        Ok(config)
    }

    pub fn to_json_string(&self) -> ChessResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ChessError::InvalidConfig(e.to_string()))
    }

    pub fn build_engine(&self) -> Box<dyn Engine> {
        self.opponent.build_engine(self.seed)
    }
}
