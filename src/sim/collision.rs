//! Collision primitives for the player and the pipes
//!
//! The player is a circle, every pipe segment is an axis-aligned rectangle in
//! screen space. Screen y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A collision circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// An axis-aligned rectangle (`min` is the top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            min: Vec2::new(left, top),
            max: Vec2::new(right, bottom),
        }
    }

    /// Point of the rectangle closest to `point`
    #[inline]
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.max(self.min).min(self.max)
    }
}

/// Check whether a circle overlaps a rectangle
///
/// Clamps the circle centre into the rectangle and compares the squared
/// distance against the squared radius. Touching counts as a hit.
#[inline]
pub fn collides(circle: Circle, rect: Rect) -> bool {
    let closest = rect.closest_point(circle.center);
    closest.distance_squared(circle.center) <= circle.radius * circle.radius
}
