//! Axis-aligned collision primitives
//!
//! One overlap predicate serves every collision pair in the game (ball vs
//! paddle, ball vs block). Using a single strict-bound test everywhere keeps
//! tunneling behavior consistent between call sites.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, position at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict-bound overlap test on both axes. Rectangles that only touch
    /// edge-to-edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }
}

/// Reflect a velocity component off the axis it hit.
#[inline]
pub fn reflect(v: f32) -> f32 {
    -v
}
