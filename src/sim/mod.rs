//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Motion advances per tick, never per wall-clock second
//! - Stable iteration order (blocks in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod layout;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Axis, BlockContact, block_contact, reflect};
pub use input::{InputEvent, Key, demo_input, handle_input};
pub use layout::block_grid;
pub use rect::Rect;
pub use state::{Ball, Block, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{place_blocks, reset_game, serve_ball, update};
