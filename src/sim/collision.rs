//! Axis-aligned rectangle geometry and overlap tests
//!
//! Everything in the world is a rectangle: the player, obstacles, clouds.
//! Collision is a strict AABB overlap test (touching edges do not collide).

use glam::Vec2;

/// An axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width/height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// X coordinate of the right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Y coordinate of the bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict AABB overlap: true only if the interiors intersect
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}
