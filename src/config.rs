//! Game and bot settings, read from a JSON file such as
//!
//! ```json
//! { "Bot": { "IsBlackBot": true, "BlackBotLevel": 4, "Optimization": "O1" },
//!   "Game": { "MaxNumTurns": 120 } }
//! ```
//!
//! Every field has a default and unknown sections are ignored.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};

use crate::board::Color;
use crate::error::ConfigError;
use crate::movegen::SeedPolicy;
use crate::search::{Optimization, ScoringMode, SearchParams};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BotSettings {
    pub is_white_bot: bool,
    pub is_black_bot: bool,
    pub white_bot_level: u32,
    pub black_bot_level: u32,
    pub bot_scoring_type: ScoringMode,
    pub optimization: Optimization,
    pub no_random: bool,
    /// Fixed move-order seed; ignored when `NoRandom` is set.
    pub seed: Option<u64>,
    #[serde(rename = "BotDelayMS")]
    pub bot_delay_ms: u64,
    pub threads: usize,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            is_white_bot: false,
            is_black_bot: true,
            white_bot_level: 3,
            black_bot_level: 3,
            bot_scoring_type: ScoringMode::NumberAndPotential,
            optimization: Optimization::AlphaBeta,
            no_random: false,
            seed: None,
            bot_delay_ms: 0,
            threads: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GameSettings {
    pub max_num_turns: usize,
}

impl Default for GameSettings {
    fn default() -> Self { Self { max_num_turns: 120 } }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Settings {
    pub bot: BotSettings,
    pub game: GameSettings,
    #[serde(skip)]
    source: Option<PathBuf>,
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let mut s: Settings =
            serde_json::from_str(&text).map_err(|source| ConfigError::Json { path: path.to_path_buf(), source })?;
        s.source = Some(path.to_path_buf());
        info!("loaded settings from {}", path.display());
        Ok(s)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> { serde_json::from_str(text) }

    pub fn source(&self) -> Option<&Path> { self.source.as_deref() }

    /// Re-read the file these settings came from; no-op for in-memory settings.
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        if let Some(path) = self.source.clone() { *self = Settings::load(path)?; }
        Ok(())
    }

    pub fn is_bot(&self, color: Color) -> bool {
        match color { Color::White => self.bot.is_white_bot, Color::Black => self.bot.is_black_bot }
    }

    pub fn bot_level(&self, color: Color) -> u32 {
        match color { Color::White => self.bot.white_bot_level, Color::Black => self.bot.black_bot_level }
    }

    pub fn seed_policy(&self) -> SeedPolicy {
        match (self.bot.no_random, self.bot.seed) {
            (true, _) => SeedPolicy::Fixed(0),
            (false, Some(seed)) => SeedPolicy::Fixed(seed),
            (false, None) => SeedPolicy::Entropy,
        }
    }

    pub fn bot_delay(&self) -> Duration { Duration::from_millis(self.bot.bot_delay_ms) }

    pub fn search_params(&self, color: Color) -> SearchParams {
        SearchParams {
            max_depth: self.bot_level(color),
            scoring: self.bot.bot_scoring_type,
            optimization: self.bot.optimization,
            seed: self.seed_policy(),
            threads: self.bot.threads.max(1),
        }
    }
}
