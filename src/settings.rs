//! Game settings
//!
//! Loaded from an optional JSON file. Every field has a default, so a partial
//! document only overrides what it names. Settings are validated into a
//! `BoardSpec` before a session is created.

use std::io;
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::board::{BoardSpec, BoardSpecError, DART_NUMBERS, RingProportions};
use crate::consts::{BOARD_RADIUS, DEVIATION, SURFACE_HEIGHT, SURFACE_WIDTH, THROWS_PER_GAME};
use crate::sim::GameSession;

/// Errors raised while loading or validating settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid board: {0}")]
    Board(#[from] BoardSpecError),
    #[error("throws per game must be at least 1")]
    NoThrows,
    #[error("deviation {0} exceeds the maximum of {max}", max = MAX_DEVIATION)]
    DeviationTooLarge(u32),
    #[error("failed to read settings from {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("malformed settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Largest accepted per-axis inaccuracy in pixels
pub const MAX_DEVIATION: u32 = 10_000;

/// Board geometry as written in the settings file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Outer radius in pixels
    pub radius: f32,
    /// Board center in surface pixels
    pub center: Vec2,
    pub rings: RingProportions,
    /// Sector numbers, clockwise from the top
    pub numbers: Vec<u8>,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            radius: BOARD_RADIUS,
            center: Vec2::new(SURFACE_WIDTH / 2.0, SURFACE_HEIGHT / 2.0),
            rings: RingProportions::default(),
            numbers: DART_NUMBERS.to_vec(),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub board: BoardSettings,
    /// Darts per game
    pub throws_per_game: u32,
    /// Maximum per-axis throw inaccuracy in pixels
    pub deviation: u32,
    /// Fixed RNG seed for reproducible games (random when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: BoardSettings::default(),
            throws_per_game: THROWS_PER_GAME,
            deviation: DEVIATION,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse and validate a JSON settings document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Check every invariant, returning the validated board
    pub fn validate(&self) -> Result<BoardSpec, ConfigError> {
        if self.throws_per_game == 0 {
            return Err(ConfigError::NoThrows);
        }
        if self.deviation > MAX_DEVIATION {
            return Err(ConfigError::DeviationTooLarge(self.deviation));
        }
        self.board_spec()
    }

    pub fn board_spec(&self) -> Result<BoardSpec, ConfigError> {
        let board = &self.board;
        Ok(BoardSpec::new(
            board.radius,
            board.center,
            board.rings,
            &board.numbers,
        )?)
    }

    /// Start a session with these settings, using `fallback_seed` when no
    /// seed is configured
    pub fn new_session(&self, fallback_seed: u64) -> Result<GameSession, ConfigError> {
        let board = self.validate()?;
        let seed = self.seed.unwrap_or(fallback_seed);
        log::info!("Game seed: {}", seed);
        Ok(GameSession::new(
            board,
            self.throws_per_game,
            self.deviation,
            seed,
        ))
    }
}
