// SPDX-License-Identifier: MPL-2.0
//! Screen-space geometry in CSS pixels.

/// A position in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Displacement from `origin` to `self` as `(dx, dy)`.
    #[must_use]
    pub fn delta_from(self, origin: Point) -> (f32, f32) {
        (self.x - origin.x, self.y - origin.y)
    }

    #[must_use]
    pub fn distance_to(self, other: Point) -> f32 {
        let (dx, dy) = other.delta_from(self);
        (dx * dx + dy * dy).sqrt()
    }
}
