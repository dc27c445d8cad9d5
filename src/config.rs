//! Playfield and gameplay configuration
//!
//! Passed explicitly to `GameState::new`. Defaults reproduce the classic
//! 550x450 layout; a JSON file may override any subset of fields.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Largest block grid a config may ask for
pub const MAX_BLOCKS: usize = 4096;

/// Error type for configuration loading and validation.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "JSON parse error: {}", e),
            Self::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    // === Playfield ===
    /// Playfield width and height
    pub playfield: Vec2,

    // === Entities ===
    pub ball_size: Vec2,
    pub paddle_size: Vec2,
    pub block_size: Vec2,
    /// Resting height of the ball's bottom edge
    pub ball_rest_y: f32,
    /// Resting height of the paddle's bottom edge
    pub paddle_rest_y: f32,

    // === Block grid ===
    pub block_rows: u32,
    pub block_cols: u32,
    /// Space between neighbouring blocks
    pub block_gap: f32,
    /// Left margin of the first column
    pub block_margin: f32,
    /// Bottom edge of the top row
    pub block_anchor_y: f32,

    // === Gameplay ===
    /// Ball velocity applied on serve (units per tick)
    pub serve_velocity: Vec2,
    /// Paddle distance per arrow key press
    pub paddle_step: f32,

    // === Timing ===
    pub tick_rate_hz: f32,
    pub max_substeps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playfield: Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),

            ball_size: Vec2::splat(BALL_SIZE),
            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            block_size: Vec2::new(BLOCK_WIDTH, BLOCK_HEIGHT),
            ball_rest_y: BALL_REST_Y,
            paddle_rest_y: PADDLE_REST_Y,

            block_rows: BLOCK_ROWS,
            block_cols: BLOCK_COLS,
            block_gap: BLOCK_GAP,
            block_margin: BLOCK_MARGIN,
            block_anchor_y: BLOCK_ANCHOR_Y,

            serve_velocity: Vec2::new(SERVE_VELOCITY.0, SERVE_VELOCITY.1),
            paddle_step: PADDLE_STEP,

            tick_rate_hz: TICK_RATE_HZ,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}

impl Config {
    /// Parse and validate a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [
            ("playfield", self.playfield),
            ("ball_size", self.ball_size),
            ("paddle_size", self.paddle_size),
            ("block_size", self.block_size),
        ];
        for (name, size) in sizes {
            if !(size.x > 0.0 && size.y > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be positive, got {}x{}",
                    name, size.x, size.y
                )));
            }
        }
        if self.paddle_size.x > self.playfield.x {
            return Err(ConfigError::Invalid(
                "paddle is wider than the playfield".to_string(),
            ));
        }
        if self.block_rows == 0 || self.block_cols == 0 {
            return Err(ConfigError::Invalid(
                "block grid needs at least one row and column".to_string(),
            ));
        }
        match (self.block_rows as usize).checked_mul(self.block_cols as usize) {
            Some(count) if count <= MAX_BLOCKS => {}
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "block grid {}x{} exceeds {} blocks",
                    self.block_rows, self.block_cols, MAX_BLOCKS
                )));
            }
        }
        self.validate_grid_fits()?;
        if !(self.paddle_step >= 0.0) {
            return Err(ConfigError::Invalid(
                "paddle_step must not be negative".to_string(),
            ));
        }
        if !(self.tick_rate_hz > 0.0) {
            return Err(ConfigError::Invalid(
                "tick_rate_hz must be positive".to_string(),
            ));
        }
        if self.max_substeps == 0 {
            return Err(ConfigError::Invalid(
                "max_substeps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The laid-out grid must stay inside the playfield
    fn validate_grid_fits(&self) -> Result<(), ConfigError> {
        // f64 so large counts times sizes stay exact
        let rows = f64::from(self.block_rows);
        let cols = f64::from(self.block_cols);
        let w = f64::from(self.block_size.x);
        let h = f64::from(self.block_size.y);
        let gap = f64::from(self.block_gap);
        let margin = f64::from(self.block_margin);
        let anchor = f64::from(self.block_anchor_y);

        let left = margin;
        let right = margin + cols * w + (cols - 1.0) * gap;
        let bottom = anchor - (rows - 1.0) * (h + gap);
        let top = anchor + h;

        let fits = gap >= 0.0
            && left >= 0.0
            && right <= f64::from(self.playfield.x)
            && bottom >= 0.0
            && top <= f64::from(self.playfield.y);
        if !fits {
            return Err(ConfigError::Invalid(format!(
                "block grid spans x {}..{}, y {}..{}, outside the {}x{} playfield",
                left, right, bottom, top, self.playfield.x, self.playfield.y
            )));
        }
        Ok(())
    }

    /// Fixed tick interval in seconds
    #[inline]
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate_hz
    }

    /// Number of blocks in a full grid
    #[inline]
    pub fn block_count(&self) -> usize {
        (self.block_rows as usize).saturating_mul(self.block_cols as usize)
    }

    /// Horizontal center of the playfield
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.playfield.x / 2.0
    }

    /// Largest x the paddle may take
    #[inline]
    pub fn paddle_max_x(&self) -> f32 {
        self.playfield.x - self.paddle_size.x
    }
}
