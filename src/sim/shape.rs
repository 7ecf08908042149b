//! Collision shapes
//!
//! `Shape` is the capability set the tick loop sees: containment,
//! intersection, center, bounding radius. Circles are the only variant in
//! scope; intersection between variants dispatches on the type pair so new
//! shapes extend the match instead of growing a hierarchy.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// A circular collision region
///
/// Fields are private so the strictly-positive radius invariant holds for
/// the lifetime of the value; movement goes through [`Shape::translate_to`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    center: Vec2,
    radius: f32,
}

impl Circle {
    /// Build a circle, rejecting non-positive radii
    pub fn new(center: Vec2, radius: f32) -> Result<Self, SimError> {
        if radius <= 0.0 || !radius.is_finite() {
            return Err(SimError::InvalidRadius { radius });
        }
        Ok(Self { center, radius })
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Check if a point lies inside or on the circle
    pub fn contains(&self, point: Vec2) -> bool {
        point.distance_squared(self.center) <= self.radius * self.radius
    }

    /// Two circles intersect iff the distance between centers is at most
    /// the sum of radii. Symmetric by construction.
    pub fn intersects(&self, other: &Circle) -> bool {
        let reach = self.radius + other.radius;
        self.center.distance_squared(other.center) <= reach * reach
    }
}

/// Polymorphic collision region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle(Circle),
}

impl Shape {
    /// Check if a point lies inside the shape
    pub fn contains(&self, point: Vec2) -> bool {
        match self {
            Shape::Circle(c) => c.contains(point),
        }
    }

    /// Check overlap with another shape
    ///
    /// Dispatch is on the variant pair; adding a shape means adding rows
    /// to this match, and every pairing must stay symmetric.
    pub fn intersects(&self, other: &Shape) -> bool {
        match (self, other) {
            (Shape::Circle(a), Shape::Circle(b)) => a.intersects(b),
        }
    }

    /// Logical position of the shape
    #[inline]
    pub fn center(&self) -> Vec2 {
        match self {
            Shape::Circle(c) => c.center,
        }
    }

    /// Radius of the smallest centered circle enclosing the shape
    #[inline]
    pub fn bounding_radius(&self) -> f32 {
        match self {
            Shape::Circle(c) => c.radius,
        }
    }

    /// Move the shape so its center sits at `pos`
    ///
    /// Translation only; size invariants are untouched.
    pub fn translate_to(&mut self, pos: Vec2) {
        match self {
            Shape::Circle(c) => c.center = pos,
        }
    }
}
