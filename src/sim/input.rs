//! Input handling
//!
//! Key and pointer events are applied synchronously between ticks.

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};
use super::tick::serve_ball;

/// Keys the game reacts to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Space,
    Left,
    Right,
    /// Any other key; ignored
    Other(String),
}

impl Key {
    /// Map a host key name. Unknown names become `Other`.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "spacebar" | "space" | " " => Key::Space,
            "left" | "arrowleft" => Key::Left,
            "right" | "arrowright" => Key::Right,
            _ => Key::Other(name.to_string()),
        }
    }
}

/// An input event delivered by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Key),
    /// Pointer drag in playfield coordinates
    PointerMove { x: f32, y: f32 },
    /// Host took keyboard focus away
    KeyboardReleased,
    /// Host gave keyboard focus back
    KeyboardAttached,
}

/// Apply one input event
pub fn handle_input(state: &mut GameState, event: &InputEvent) {
    match event {
        InputEvent::KeyDown(key) => {
            if !state.keyboard_attached {
                log::debug!("Ignoring {:?}: keyboard released", key);
                return;
            }
            let step = state.config.paddle_step;
            match key {
                Key::Space => {
                    if state.phase == GamePhase::Resting {
                        let vel = state.config.serve_velocity;
                        serve_ball(state, vel);
                    }
                }
                Key::Left => step_paddle(state, -step),
                Key::Right => step_paddle(state, step),
                Key::Other(_) => {}
            }
        }
        &InputEvent::PointerMove { x, y } => {
            if !(x.is_finite() && y.is_finite()) {
                return;
            }
            // Only drags in the bottom quarter steer the paddle
            if y <= state.config.playfield.y / 4.0 {
                state.paddle.rect.pos.x = x.clamp(0.0, state.config.paddle_max_x());
                if state.phase == GamePhase::Resting {
                    state.ball.rect.pos.x = state.ball_x_over_paddle();
                }
            }
        }
        InputEvent::KeyboardReleased => {
            log::info!("Keyboard released");
            state.keyboard_attached = false;
        }
        InputEvent::KeyboardAttached => {
            state.keyboard_attached = true;
        }
    }
}

/// Move the paddle by `delta`, clamped to the playfield; a resting ball follows
fn step_paddle(state: &mut GameState, delta: f32) {
    let old_x = state.paddle.rect.x();
    let new_x = (old_x + delta).clamp(0.0, state.config.paddle_max_x());
    if new_x != old_x + delta {
        log::debug!("Paddle clamped at x={}", new_x);
    }

    state.paddle.rect.pos.x = new_x;
    if state.phase == GamePhase::Resting {
        state.ball.rect.pos.x += new_x - old_x;
    }
}

/// Inputs a simple demo bot would send this tick
///
/// Serves when resting, otherwise steers the paddle under the ball.
pub fn demo_input(state: &GameState) -> Vec<InputEvent> {
    if !state.served() {
        return vec![InputEvent::KeyDown(Key::Space)];
    }

    let target_x = state.ball.rect.center_x() - state.paddle.rect.width() / 2.0;
    vec![InputEvent::PointerMove {
        x: target_x,
        y: state.paddle.rect.y(),
    }]
}
