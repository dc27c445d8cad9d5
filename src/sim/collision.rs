//! Collision detection and response for axis-aligned rects
//!
//! Responses only flip velocity components. Positions are never corrected,
//! so an overlapping ball can flip again on the following tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Velocity axis flipped by a collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Flip x velocity
    Horizontal,
    /// Flip y velocity
    Vertical,
}

/// Flip one velocity component
#[inline]
pub fn reflect(velocity: Vec2, axis: Axis) -> Vec2 {
    match axis {
        Axis::Horizontal => Vec2::new(-velocity.x, velocity.y),
        Axis::Vertical => Vec2::new(velocity.x, -velocity.y),
    }
}

/// Outcome of testing the ball against a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockContact {
    Miss,
    /// Hit that flips the given axis
    Reflect(Axis),
    /// Hit that passes neither axis test; the block still breaks
    Touch,
}

/// Classify a block contact
///
/// The vertical test is `ball.y <= block.top || ball.top >= block.y`. Any
/// overlapping pair satisfies it (overlap implies `ball.y <= block.top`), so
/// the horizontal branch never fires and side hits bounce vertically. This
/// matches the classic behavior and is kept as-is.
pub fn block_contact(block: &Rect, ball: &Rect) -> BlockContact {
    if !block.overlaps(ball) {
        return BlockContact::Miss;
    }

    if ball.y() <= block.top() || ball.top() >= block.y() {
        BlockContact::Reflect(Axis::Vertical)
    } else if ball.x() <= block.right() || ball.right() >= block.x() {
        BlockContact::Reflect(Axis::Horizontal)
    } else {
        BlockContact::Touch
    }
}

/// Check if the ball touches or passes a side wall
#[inline]
pub fn ball_side_wall_collision(ball: &Rect, playfield_width: f32) -> bool {
    ball.x() <= 0.0 || ball.x() >= playfield_width - ball.width()
}

/// Check if the ball's top edge reached the ceiling
#[inline]
pub fn ball_ceiling_collision(ball: &Rect, playfield_height: f32) -> bool {
    ball.top() >= playfield_height
}

/// Check if the ball fell out through the bottom
#[inline]
pub fn ball_bottom_exit(ball: &Rect) -> bool {
    ball.top() <= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_reflect() {
        let v = Vec2::new(2.0, -3.0);
        assert_eq!(reflect(v, Axis::Horizontal), Vec2::new(-2.0, -3.0));
        assert_eq!(reflect(v, Axis::Vertical), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_block_miss() {
        let block = rect(100.0, 300.0, 50.0, 20.0);
        assert_eq!(
            block_contact(&block, &rect(10.0, 10.0, 10.0, 10.0)),
            BlockContact::Miss
        );
    }

    #[test]
    fn test_block_hit_from_below_is_vertical() {
        let block = rect(100.0, 300.0, 50.0, 20.0);
        let ball = rect(120.0, 291.0, 10.0, 10.0);
        assert_eq!(
            block_contact(&block, &ball),
            BlockContact::Reflect(Axis::Vertical)
        );
    }

    #[test]
    fn test_block_side_hit_still_vertical() {
        // Ball entering the block's left face mid-height
        let block = rect(100.0, 300.0, 50.0, 20.0);
        let ball = rect(91.0, 305.0, 10.0, 10.0);
        assert_eq!(
            block_contact(&block, &ball),
            BlockContact::Reflect(Axis::Vertical)
        );
    }

    #[test]
    fn test_block_touch_without_axis() {
        // NaN coordinates pass the overlap test but fail both axis tests
        let block = rect(100.0, 300.0, 50.0, 20.0);
        let ball = rect(f32::NAN, f32::NAN, 10.0, 10.0);
        assert_eq!(block_contact(&block, &ball), BlockContact::Touch);
    }

    #[test]
    fn test_side_walls() {
        assert!(ball_side_wall_collision(&rect(0.0, 100.0, 10.0, 10.0), 550.0));
        assert!(ball_side_wall_collision(&rect(-2.0, 100.0, 10.0, 10.0), 550.0));
        assert!(ball_side_wall_collision(&rect(540.0, 100.0, 10.0, 10.0), 550.0));
        assert!(!ball_side_wall_collision(&rect(270.0, 100.0, 10.0, 10.0), 550.0));
    }

    #[test]
    fn test_ceiling_and_bottom() {
        assert!(ball_ceiling_collision(&rect(100.0, 440.0, 10.0, 10.0), 450.0));
        assert!(!ball_ceiling_collision(&rect(100.0, 439.0, 10.0, 10.0), 450.0));

        assert!(ball_bottom_exit(&rect(100.0, -10.0, 10.0, 10.0)));
        assert!(!ball_bottom_exit(&rect(100.0, -9.0, 10.0, 10.0)));
    }
}
