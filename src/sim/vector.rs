//! Vector helpers shared by collision response
//!
//! Everything here is total: zero-length inputs resolve to the zero vector
//! so callers never branch on degenerate geometry.

use glam::Vec2;

/// Unit normal pointing from `other` toward `own`
///
/// Coincident centers yield the zero vector, which makes the reflection
/// below a no-op rather than producing NaNs.
#[inline]
pub fn collision_normal(own: Vec2, other: Vec2) -> Vec2 {
    (own - other).normalize_or_zero()
}

/// Reflect velocity off a surface, scaling the normal component by elasticity
///
/// `v' = v - (1 + e)(v·n)n`: with `e = 1` this is the standard reflection
/// `v - 2(v·n)n` (speed preserved), with `e = 0` the normal component is
/// absorbed entirely. Velocity already separating from the surface
/// (`v·n >= 0`) is returned unchanged so a resolved pair cannot re-bounce
/// within the same tick.
#[inline]
pub fn reflect_with_elasticity(velocity: Vec2, normal: Vec2, elasticity: f32) -> Vec2 {
    let along = velocity.dot(normal);
    if along >= 0.0 {
        return velocity;
    }
    velocity - (1.0 + elasticity) * along * normal
}
