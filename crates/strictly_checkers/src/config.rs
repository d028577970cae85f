//! Game configuration.

use crate::error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Tunable timings and scoring for a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Countdown for a challenge, in ticks (seconds in the terminal UI).
    #[serde(default = "default_challenge_seconds")]
    challenge_seconds: u32,

    /// Pause before the AI moves, in milliseconds.
    #[serde(default = "default_ai_delay_ms")]
    ai_delay_ms: u64,

    /// Points for any committed move.
    #[serde(default = "default_move_points")]
    move_points: u32,

    /// Extra points for a capture.
    #[serde(default = "default_capture_points")]
    capture_points: u32,

    /// Points lost for skipping a challenge (score never drops below zero).
    #[serde(default = "default_skip_penalty")]
    skip_penalty: u32,

    /// Fixed RNG seed for reproducible games.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_challenge_seconds() -> u32 {
    120
}

fn default_ai_delay_ms() -> u64 {
    1000
}

fn default_move_points() -> u32 {
    2
}

fn default_capture_points() -> u32 {
    5
}

fn default_skip_penalty() -> u32 {
    1
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            challenge_seconds: default_challenge_seconds(),
            ai_delay_ms: default_ai_delay_ms(),
            move_points: default_move_points(),
            capture_points: default_capture_points(),
            skip_penalty: default_skip_penalty(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces the RNG seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Replaces the challenge countdown.
    pub fn with_challenge_seconds(mut self, seconds: u32) -> Self {
        self.challenge_seconds = seconds;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.challenge_seconds == 0 {
            return Err(ConfigError::new("challenge_seconds must be at least 1"));
        }
        Ok(())
    }
}
