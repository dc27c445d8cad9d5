//! Axis-aligned rectangle geometry shared by every entity
//!
//! A rect is anchored at its bottom-left corner:
//! - pos: (x, y) of the bottom-left corner
//! - size: (width, height), both positive

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in playfield space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Bottom-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        debug_assert!(size.x > 0.0 && size.y > 0.0, "rect size must be positive");
        Self { pos, size }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Right edge x
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Top edge y
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Check if two rects overlap. Touching edges count as contact.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() < other.x()
            || self.x() > other.right()
            || self.top() < other.y()
            || self.y() > other.top())
    }

    /// Check if the rect lies fully inside `[0, bounds.x] x [0, bounds.y]`
    pub fn inside(&self, bounds: Vec2) -> bool {
        self.x() >= 0.0 && self.y() >= 0.0 && self.right() <= bounds.x && self.top() <= bounds.y
    }
}
