//! Immutable ray value types.
//!
//! The direction is stored as given. Callers normalize when they need a
//! unit direction; rays built by [`ray_from_screen_pos`] already are.
//!
//! [`ray_from_screen_pos`]: crate::camera::utils::ray_from_screen_pos

use glam::{Vec2, Vec3};

/// A 2D ray: origin point plus direction vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2 {
    origin: Vec2,
    direction: Vec2,
}

impl Ray2 {
    /// Ray starting at `origin` heading along `direction`.
    #[must_use]
    pub const fn new(origin: Vec2, direction: Vec2) -> Self {
        Self { origin, direction }
    }

    /// Start point.
    #[must_use]
    pub const fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Direction, not necessarily unit length.
    #[must_use]
    pub const fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Point at parameter `t` (`origin + direction * t`).
    #[must_use]
    pub fn at(&self, t: f32) -> Vec2 {
        self.origin + self.direction * t
    }
}

/// A 3D ray: origin point plus direction vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray3 {
    origin: Vec3,
    direction: Vec3,
}

impl Ray3 {
    /// Ray starting at `origin` heading along `direction`.
    #[must_use]
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Start point.
    #[must_use]
    pub const fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Direction, not necessarily unit length.
    #[must_use]
    pub const fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Point at parameter `t` (`origin + direction * t`).
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
