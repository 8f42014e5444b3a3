//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (core logic, terminal rendering, input mapping).
//!
//! # World Dimensions
//!
//! The playfield is a virtual 600x900 canvas. Words are positioned in these
//! world units; renderers project them onto whatever surface they draw to.
//!
//! # Reference Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WORLD_WIDTH` | 600 | Canvas width |
//! | `WORLD_HEIGHT` | 900 | Canvas height |
//! | `BOTTOM_THRESHOLD` | 600 | A word at or below this `y` ends the game |
//! | `TICK_INTERVAL_MS` | 1000 | Time between ticks |
//! | `MIN_WORD_LENGTH` | 3 | Shortest spawned word |
//! | `MAX_WORD_LENGTH` | 8 | Longest spawned word |
//! | `WORD_LENGTH_LIMIT` | 32 | Largest `max_word_length` a config may ask for |
//! | `HORIZONTAL_MARGIN` | 60 | Leftmost spawn column |
//! | `RIGHT_MARGIN` | 50 | Spawn stays this far from the right edge |
//! | `SPAWN_Y` | 10 | Height at which new words appear |
//! | `MOVE_STEP` | 25 | Distance every word falls per tick |
//!
//! # Examples
//!
//! ```
//! use tui_ztype_types::{GameConfig, WordMode, BOTTOM_THRESHOLD};
//!
//! let config = GameConfig::default();
//! assert_eq!(config.bottom_threshold, BOTTOM_THRESHOLD);
//! assert!(config.validate().is_ok());
//!
//! assert!(WordMode::Active.is_active());
//! assert!(!WordMode::Inactive.is_active());
//! ```

use thiserror::Error;

/// Canvas width in world units (600)
pub const WORLD_WIDTH: i32 = 600;

/// Canvas height in world units (900)
pub const WORLD_HEIGHT: i32 = 900;

/// A word whose `y` reaches this value ends the game (600)
pub const BOTTOM_THRESHOLD: i32 = 600;

/// Interval between ticks in milliseconds (1 second)
pub const TICK_INTERVAL_MS: u32 = 1000;

/// Shortest word the spawner produces
pub const MIN_WORD_LENGTH: usize = 3;

/// Longest word the spawner produces
pub const MAX_WORD_LENGTH: usize = 8;

/// Upper bound on a configured maximum word length
pub const WORD_LENGTH_LIMIT: usize = 32;

/// Leftmost x at which a word can spawn
pub const HORIZONTAL_MARGIN: i32 = 60;

/// Distance kept between a spawned word and the right edge
pub const RIGHT_MARGIN: i32 = 50;

/// Height at which new words appear
pub const SPAWN_Y: i32 = 10;

/// Distance every word falls per tick
pub const MOVE_STEP: i32 = 25;

/// Letters a generated word can contain
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Message shown once the game has ended
pub const GAME_OVER_MESSAGE: &str = "Game Over";

/// Whether a word is the one currently being typed.
///
/// A word starts `Inactive` and can only move to `Active`; there is no way
/// back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WordMode {
    #[default]
    Inactive,
    Active,
}

impl WordMode {
    pub fn is_active(&self) -> bool {
        matches!(self, WordMode::Active)
    }
}

/// Semantic colour of a piece of text drawn into a scene.
///
/// Renderers pick concrete colours; the core only says what the text is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ink {
    /// A word nobody is typing yet (red).
    Inactive,
    /// The word being typed (green).
    Active,
    /// The end-of-game message (blue).
    Message,
}

impl From<WordMode> for Ink {
    fn from(mode: WordMode) -> Self {
        match mode {
            WordMode::Inactive => Ink::Inactive,
            WordMode::Active => Ink::Active,
        }
    }
}

/// Actions the driver can feed into the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// A single typed character.
    Type(char),
    /// Start a new game (only honoured by the runner after game over).
    Restart,
}

/// Validation failures for [`GameConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("minimum word length {min} exceeds maximum {max}")]
    WordLengthRange { min: usize, max: usize },

    #[error("maximum word length {max} is above the limit of {limit}")]
    WordLengthTooLarge { max: usize, limit: usize },

    #[error("margins {left} and {right} leave no spawn column in a canvas {width} wide")]
    NoSpawnColumn { left: i32, right: i32, width: i32 },

    #[error("canvas must be at least 1x1, got {width}x{height}")]
    EmptyCanvas { width: i32, height: i32 },

    #[error("tick interval must be non-zero")]
    ZeroTickInterval,

    #[error("move step must be positive, got {0}")]
    NonPositiveMoveStep(i32),
}

/// Tunable game parameters supplied by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub bottom_threshold: i32,
    pub tick_interval_ms: u32,
    pub min_word_length: usize,
    pub max_word_length: usize,
    pub horizontal_margin: i32,
    pub right_margin: i32,
    pub spawn_y: i32,
    pub move_step: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            bottom_threshold: BOTTOM_THRESHOLD,
            tick_interval_ms: TICK_INTERVAL_MS,
            min_word_length: MIN_WORD_LENGTH,
            max_word_length: MAX_WORD_LENGTH,
            horizontal_margin: HORIZONTAL_MARGIN,
            right_margin: RIGHT_MARGIN,
            spawn_y: SPAWN_Y,
            move_step: MOVE_STEP,
        }
    }
}

impl GameConfig {
    /// Check that the parameters describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::EmptyCanvas {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_word_length > self.max_word_length {
            return Err(ConfigError::WordLengthRange {
                min: self.min_word_length,
                max: self.max_word_length,
            });
        }
        if self.max_word_length > WORD_LENGTH_LIMIT {
            return Err(ConfigError::WordLengthTooLarge {
                max: self.max_word_length,
                limit: WORD_LENGTH_LIMIT,
            });
        }
        if self.spawn_columns() <= 0 {
            return Err(ConfigError::NoSpawnColumn {
                left: self.horizontal_margin,
                right: self.right_margin,
                width: self.width,
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.move_step <= 0 {
            return Err(ConfigError::NonPositiveMoveStep(self.move_step));
        }
        Ok(())
    }

    /// Number of distinct x positions a new word can spawn at.
    ///
    /// Spawn x lies in `[horizontal_margin, width - right_margin)`.
    pub fn spawn_columns(&self) -> i32 {
        self.width - self.horizontal_margin - self.right_margin
    }
}
