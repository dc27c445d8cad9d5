//! Fixed-rate simulation tick
//!
//! Core game loop that advances the controller state by one frame.

use glam::Vec2;

use super::collision::{ball_bottom_exit, ball_ceiling_collision, ball_side_wall_collision};
use super::layout::block_grid;
use super::state::{Block, GameEvent, GamePhase, GameState, rest_ball_x};

/// Advance the game state by one tick
///
/// Order matters: move, paddle, blocks, walls, ceiling, bottom exit, win.
/// Motion is per tick; `dt` is only reported for tracing.
pub fn update(state: &mut GameState, dt: f32) {
    state.ball.move_step();

    state.paddle.check_collision(&mut state.ball);

    // At most one block per tick: the scan stops at the first hit, which is
    // removed once the scan is over
    let hit = state
        .blocks
        .iter()
        .position(|block| block.check_collision(&mut state.ball));
    if let Some(idx) = hit {
        destroy_block(state, idx);
    }

    let ball = &mut state.ball;
    if ball_side_wall_collision(&ball.rect, state.config.playfield.x) {
        ball.vel.x = -ball.vel.x;
    }
    if ball_ceiling_collision(&ball.rect, state.config.playfield.y) {
        ball.vel.y = -ball.vel.y;
    }
    if ball_bottom_exit(&ball.rect) {
        log::info!("Ball lost at x={:.1}", ball.rect.x());
        state.push_event(GameEvent::BallLost);
        reset_game(state);
    }

    // A win takes two ticks: the first records it, the second respawns
    if state.blocks.is_empty() {
        if state.won {
            reset_game(state);
        } else {
            reset_game(state);
            state.won = true;
            log::info!("All blocks cleared after {} ticks", state.time_ticks);
            state.push_event(GameEvent::Won);
        }
    }

    state.time_ticks += 1;
    log::trace!(
        "tick {} dt={:.4} ball=({:.1}, {:.1}) vel=({}, {}) blocks={}",
        state.time_ticks,
        dt,
        state.ball.rect.x(),
        state.ball.rect.y(),
        state.ball.vel.x,
        state.ball.vel.y,
        state.blocks.len()
    );
}

/// Remove the block at `idx`, preserving the order of the rest
fn destroy_block(state: &mut GameState, idx: usize) {
    let block = state.blocks.remove(idx);
    log::debug!("Block {} destroyed ({} left)", block.id, state.blocks.len());
    state.push_event(GameEvent::BlockDestroyed { id: block.id });
}

/// Return ball and paddle to the start of a round
///
/// After a win this also replaces the whole grid and clears `won`.
pub fn reset_game(state: &mut GameState) {
    let config = &state.config;
    let ball_pos = Vec2::new(rest_ball_x(config), config.ball_rest_y);
    let paddle_pos = Vec2::new(
        config.center_x() - config.paddle_size.x / 2.0,
        config.paddle_rest_y,
    );

    state.ball.vel = Vec2::ZERO;
    state.ball.rect.pos = ball_pos;
    state.paddle.rect.pos = paddle_pos;

    let respawned = state.won;
    if respawned {
        let remaining = std::mem::take(&mut state.blocks);
        for block in remaining {
            state.push_event(GameEvent::BlockDestroyed { id: block.id });
        }
        place_blocks(state);
        state.won = false;
        log::info!("Block grid respawned ({} blocks)", state.blocks.len());
    }

    state.phase = GamePhase::Resting;
    log::debug!("Round reset (respawned: {})", respawned);
    state.push_event(GameEvent::Reset { respawned });
}

/// Append a full block grid with fresh IDs
pub fn place_blocks(state: &mut GameState) {
    for rect in block_grid(&state.config) {
        let id = state.next_entity_id();
        state.blocks.push(Block { id, rect });
        state.push_event(GameEvent::BlockSpawned { id, rect });
    }
}

/// Launch the ball with the given velocity
pub fn serve_ball(state: &mut GameState, vel: Vec2) {
    state.ball.vel = vel;
    state.phase = GamePhase::InPlay;
    log::info!("Ball served with velocity ({}, {})", vel.x, vel.y);
    state.push_event(GameEvent::Served { vel });
}
