//! Game state and core simulation types
//!
//! The controller state owns the ball, the paddle and the live block set.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{BlockContact, block_contact, reflect};
use super::rect::Rect;
use crate::config::Config;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball sits on the paddle and follows it, waiting for serve
    Resting,
    /// Ball moves under its velocity
    InPlay,
}

/// Notifications for the host's visual representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BlockSpawned { id: u32, rect: Rect },
    BlockDestroyed { id: u32 },
    Served { vel: Vec2 },
    /// Ball left through the bottom of the playfield
    BallLost,
    /// Every block was destroyed; the grid respawns on the next reset
    Won,
    /// Ball and paddle returned to their start positions
    Reset { respawned: bool },
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Units per tick
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            rect: Rect::new(pos, size),
            vel: Vec2::ZERO,
        }
    }

    /// Advance one step. No bounds checking.
    #[inline]
    pub fn move_step(&mut self) {
        self.rect.pos += self.vel;
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            rect: Rect::new(pos, size),
        }
    }

    /// Flip the ball's vertical velocity on contact. Returns whether it hit.
    ///
    /// No position correction: the ball may stay overlapped for a frame,
    /// in which case the next tick flips it back.
    pub fn check_collision(&self, ball: &mut Ball) -> bool {
        if self.rect.overlaps(&ball.rect) {
            ball.vel.y = -ball.vel.y;
            true
        } else {
            false
        }
    }
}

/// A breakable block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub id: u32,
    pub rect: Rect,
}

impl Block {
    /// Reflect the ball on contact and report the hit so the caller can
    /// destroy this block
    pub fn check_collision(&self, ball: &mut Ball) -> bool {
        match block_contact(&self.rect, &ball.rect) {
            BlockContact::Reflect(axis) => {
                ball.vel = reflect(ball.vel, axis);
                true
            }
            BlockContact::Touch => true,
            BlockContact::Miss => false,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: Config,
    pub phase: GamePhase,
    /// Set when the grid was cleared; the next reset respawns it
    pub won: bool,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Live blocks in spawn order
    pub blocks: Vec<Block>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Cleared when the host revokes keyboard focus
    pub keyboard_attached: bool,
    /// Events not yet drained by the host
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a resting game with no blocks placed yet
    ///
    /// `config` must pass [`Config::validate`]; `Driver::new` checks it.
    pub fn new(config: Config) -> Self {
        let ball = Ball::new(
            Vec2::new(rest_ball_x(&config), config.ball_rest_y),
            config.ball_size,
        );
        let paddle = Paddle::new(
            Vec2::new(
                config.center_x() - config.paddle_size.x / 2.0,
                config.paddle_rest_y,
            ),
            config.paddle_size,
        );

        Self {
            config,
            phase: GamePhase::Resting,
            won: false,
            ball,
            paddle,
            blocks: Vec::new(),
            time_ticks: 0,
            keyboard_attached: true,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a game with the full block grid laid out
    pub fn start(config: Config) -> Self {
        let mut state = Self::new(config);
        super::tick::place_blocks(&mut state);
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn served(&self) -> bool {
        self.phase == GamePhase::InPlay
    }

    /// Ball x that centers it over the paddle
    #[inline]
    pub fn ball_x_over_paddle(&self) -> f32 {
        self.paddle.rect.center_x() - self.ball.rect.width() / 2.0
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Ball x at the start of a round
pub(crate) fn rest_ball_x(config: &Config) -> f32 {
    config.center_x() - config.ball_size.x / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_rests_centered() {
        let state = GameState::new(Config::default());
        assert_eq!(state.phase, GamePhase::Resting);
        assert!(!state.won);
        assert!(state.blocks.is_empty());
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.ball.rect.pos, Vec2::new(270.0, 30.0));
        assert_eq!(state.paddle.rect.pos, Vec2::new(250.0, 20.0));
        assert_eq!(state.ball_x_over_paddle(), state.ball.rect.x());
    }

    #[test]
    fn test_start_places_full_grid() {
        let state = GameState::start(Config::default());
        assert_eq!(state.blocks.len(), 45);
        assert_eq!(state.events.len(), 45);
    }

    #[test]
    fn test_ball_move_step() {
        let mut ball = Ball::new(Vec2::new(100.0, 100.0), Vec2::splat(10.0));
        ball.vel = Vec2::new(2.0, -3.0);
        ball.move_step();
        assert_eq!(ball.rect.pos, Vec2::new(102.0, 97.0));
        // Size is untouched
        assert_eq!(ball.rect.size, Vec2::splat(10.0));
    }

    #[test]
    fn test_paddle_flips_vertical_only() {
        let paddle = Paddle::new(Vec2::new(100.0, 20.0), Vec2::new(50.0, 10.0));
        let mut ball = Ball::new(Vec2::new(110.0, 25.0), Vec2::splat(10.0));
        ball.vel = Vec2::new(2.0, -2.0);

        assert!(paddle.check_collision(&mut ball));
        assert_eq!(ball.vel, Vec2::new(2.0, 2.0));
        // Position is not corrected
        assert_eq!(ball.rect.pos, Vec2::new(110.0, 25.0));
    }

    #[test]
    fn test_paddle_miss_leaves_velocity() {
        let paddle = Paddle::new(Vec2::new(100.0, 20.0), Vec2::new(50.0, 10.0));
        let mut ball = Ball::new(Vec2::new(300.0, 200.0), Vec2::splat(10.0));
        ball.vel = Vec2::new(2.0, -2.0);

        assert!(!paddle.check_collision(&mut ball));
        assert_eq!(ball.vel, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn test_block_hit_flips_vertical() {
        let block = Block {
            id: 7,
            rect: Rect::new(Vec2::new(100.0, 300.0), Vec2::new(50.0, 20.0)),
        };
        let mut ball = Ball::new(Vec2::new(120.0, 292.0), Vec2::splat(10.0));
        ball.vel = Vec2::new(2.0, 2.0);

        assert!(block.check_collision(&mut ball));
        assert_eq!(ball.vel, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn test_block_touch_breaks_without_reflecting() {
        let block = Block {
            id: 3,
            rect: Rect::new(Vec2::new(100.0, 300.0), Vec2::new(50.0, 20.0)),
        };
        let mut ball = Ball::new(Vec2::new(f32::NAN, f32::NAN), Vec2::splat(10.0));
        ball.vel = Vec2::new(2.0, 2.0);

        assert!(block.check_collision(&mut ball));
        assert_eq!(ball.vel, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_entity_ids_increase() {
        let mut state = GameState::new(Config::default());
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }

    #[test]
    fn test_snapshot_skips_events() {
        let state = GameState::start(Config::default());
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.blocks.len(), 45);
        assert!(restored.events.is_empty());
        assert_eq!(restored.phase, GamePhase::Resting);
    }
}
