//! Breakout - A minimal brick-breaking arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state, input)
//! - `config`: Playfield and gameplay configuration
//! - `driver`: Fixed-rate tick driver with a single-consumer input queue

pub mod config;
pub mod driver;
pub mod sim;

pub use config::{Config, ConfigError};
pub use driver::Driver;

/// Game configuration constants
///
/// Coordinates have their origin at the bottom-left of the playfield, y up.
pub mod consts {
    /// Simulation tick rate (Hz)
    pub const TICK_RATE_HZ: f32 = 60.0;
    /// Maximum ticks per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta the driver will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 550.0;
    pub const PLAYFIELD_HEIGHT: f32 = 450.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_REST_Y: f32 = 30.0;
    /// Serve velocity in units per tick
    pub const SERVE_VELOCITY: (f32, f32) = (2.0, 2.0);

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 50.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_REST_Y: f32 = 20.0;
    /// Distance moved per arrow key press
    pub const PADDLE_STEP: f32 = 15.0;

    /// Block grid
    pub const BLOCK_WIDTH: f32 = 50.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    pub const BLOCK_ROWS: u32 = 5;
    pub const BLOCK_COLS: u32 = 9;
    pub const BLOCK_GAP: f32 = 10.0;
    pub const BLOCK_MARGIN: f32 = 10.0;
    /// Bottom edge of the top block row
    pub const BLOCK_ANCHOR_Y: f32 = 350.0 - BLOCK_MARGIN;
}
