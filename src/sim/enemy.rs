//! Enemy entities
//!
//! One flat contract (shape / update / on_collision) with motion policy
//! specialized per `EnemyKind` variant. Position IS the shape center for
//! circle-backed enemies, so there is no separate sync step to forget.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shape::{Circle, Shape};
use super::vector::{collision_normal, reflect_with_elasticity};
use crate::consts::{GRAVITY, HOVER_AMPLITUDE, HOVER_ANGULAR_SPEED, KNOCKBACK_DECAY, TERMINAL_SPEED};
use crate::error::SimError;

/// Type id for [`EnemyKind::Hovering`] (renderer discriminant)
pub const TYPE_HOVERING: u8 = 1;
/// Type id for [`EnemyKind::Faller`]
pub const TYPE_FALLER: u8 = 2;
/// Type id for [`EnemyKind::Sentry`]
pub const TYPE_SENTRY: u8 = 3;

/// Motion policy variants, carrying their per-variant state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Bobs around a home point with bounded amplitude; never integrates
    /// gravity, and collision knockback decays instead of accumulating.
    Hovering { home: Vec2, phase: f32 },
    /// Falls under gravity, capped at terminal speed
    Faller,
    /// Holds position; only collision knockback (decaying) moves it
    Sentry,
}

impl EnemyKind {
    /// Resolve a spec type id to a variant, anchored at `pos`
    ///
    /// Unknown ids are a load-time validation failure; no partially-typed
    /// entity is ever constructed.
    pub fn from_type_id(type_id: u8, pos: Vec2) -> Result<Self, SimError> {
        match type_id {
            TYPE_HOVERING => Ok(EnemyKind::Hovering { home: pos, phase: 0.0 }),
            TYPE_FALLER => Ok(EnemyKind::Faller),
            TYPE_SENTRY => Ok(EnemyKind::Sentry),
            _ => Err(SimError::UnknownTypeId { type_id }),
        }
    }

    /// Renderer-facing integer discriminant
    pub fn type_id(&self) -> u8 {
        match self {
            EnemyKind::Hovering { .. } => TYPE_HOVERING,
            EnemyKind::Faller => TYPE_FALLER,
            EnemyKind::Sentry => TYPE_SENTRY,
        }
    }
}

/// A live enemy entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    elasticity: f32,
    shape: Shape,
    pub vel: Vec2,
    pub alive: bool,
}

impl Enemy {
    /// Construct an enemy with a circular hit shape
    ///
    /// Elasticity outside [0, 1] and non-positive radii are rejected, never
    /// clamped; callers must supply valid data.
    pub fn new(
        id: u32,
        kind: EnemyKind,
        pos: Vec2,
        radius: f32,
        elasticity: f32,
    ) -> Result<Self, SimError> {
        if !(0.0..=1.0).contains(&elasticity) {
            return Err(SimError::ElasticityOutOfRange { elasticity });
        }
        let circle = Circle::new(pos, radius)?;
        Ok(Self {
            id,
            kind,
            elasticity,
            shape: Shape::Circle(circle),
            vel: Vec2::ZERO,
            alive: true,
        })
    }

    /// Current collision region, always in sync with logical position
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Logical position (the shape center)
    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.shape.center()
    }

    /// Fraction of collision-normal velocity retained on bounce
    #[inline]
    pub fn elasticity(&self) -> f32 {
        self.elasticity
    }

    /// Advance motion state by `dt` seconds
    ///
    /// `dt == 0` leaves position and velocity exactly unchanged, which
    /// deterministic replays rely on.
    pub fn update(&mut self, dt: f32) {
        match &mut self.kind {
            EnemyKind::Hovering { home, phase } => {
                // Knockback drifts the home point, then decays; the bob
                // offset itself is bounded by amplitude.
                *home += self.vel * dt;
                *phase += HOVER_ANGULAR_SPEED * dt;
                self.vel *= (-KNOCKBACK_DECAY * dt).exp();
                let bob = Vec2::new(0.0, phase.sin() * HOVER_AMPLITUDE);
                self.shape.translate_to(*home + bob);
            }
            EnemyKind::Faller => {
                self.vel.y += GRAVITY * dt;
                self.vel = self.vel.clamp_length_max(TERMINAL_SPEED);
                let pos = self.shape.center();
                self.shape.translate_to(pos + self.vel * dt);
            }
            EnemyKind::Sentry => {
                let pos = self.shape.center();
                self.shape.translate_to(pos + self.vel * dt);
                self.vel *= (-KNOCKBACK_DECAY * dt).exp();
            }
        }
    }

    /// Default bounce reaction: reflect own velocity along the collision
    /// normal, scaled by own elasticity
    ///
    /// The normal points from the other entity's center toward this one;
    /// coincident centers make this a no-op.
    pub fn on_collision(&mut self, other_center: Vec2) {
        let normal = collision_normal(self.pos(), other_center);
        self.vel = reflect_with_elasticity(self.vel, normal, self.elasticity);
    }

    /// Mark for removal at the end of the current tick
    pub fn kill(&mut self) {
        self.alive = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hovering(pos: Vec2, elasticity: f32) -> Enemy {
        let kind = EnemyKind::from_type_id(TYPE_HOVERING, pos).unwrap();
        Enemy::new(0, kind, pos, 4.0, elasticity).unwrap()
    }

    #[test]
    fn test_elasticity_bounds_enforced() {
        let pos = Vec2::ZERO;
        let kind = EnemyKind::Sentry;
        assert!(matches!(
            Enemy::new(0, kind, pos, 4.0, 1.5),
            Err(SimError::ElasticityOutOfRange { .. })
        ));
        assert!(matches!(
            Enemy::new(0, kind, pos, 4.0, -0.1),
            Err(SimError::ElasticityOutOfRange { .. })
        ));
        assert!(Enemy::new(0, kind, pos, 4.0, 0.0).is_ok());
        assert!(Enemy::new(0, kind, pos, 4.0, 1.0).is_ok());
    }

    #[test]
    fn test_unknown_type_id_rejected() {
        assert!(matches!(
            EnemyKind::from_type_id(99, Vec2::ZERO),
            Err(SimError::UnknownTypeId { type_id: 99 })
        ));
    }

    #[test]
    fn test_update_zero_dt_is_noop() {
        for type_id in [TYPE_HOVERING, TYPE_FALLER, TYPE_SENTRY] {
            let pos = Vec2::new(10.0, 20.0);
            let kind = EnemyKind::from_type_id(type_id, pos).unwrap();
            let mut e = Enemy::new(0, kind, pos, 4.0, 0.5).unwrap();
            e.vel = Vec2::new(30.0, -12.0);

            let (p0, v0) = (e.pos(), e.vel);
            e.update(0.0);
            assert_eq!(e.pos(), p0, "position changed for type {type_id}");
            assert_eq!(e.vel, v0, "velocity changed for type {type_id}");
        }
    }

    #[test]
    fn test_hovering_ignores_gravity_and_stays_bounded() {
        let home = Vec2::new(50.0, 50.0);
        let mut e = hovering(home, 0.5);

        for _ in 0..2400 {
            e.update(1.0 / 120.0);
        }
        // No accumulated fall; position stays within bob amplitude of home
        assert!((e.pos() - home).length() <= HOVER_AMPLITUDE + 0.01);
        assert!(e.vel.length() < 0.01);
    }

    #[test]
    fn test_faller_integrates_gravity() {
        let mut e = Enemy::new(0, EnemyKind::Faller, Vec2::ZERO, 4.0, 0.5).unwrap();
        e.update(0.5);
        assert!(e.vel.y > 0.0);
        assert!(e.pos().y > 0.0);
        assert_eq!(e.pos().x, 0.0);
    }

    #[test]
    fn test_faller_respects_terminal_speed() {
        let mut e = Enemy::new(0, EnemyKind::Faller, Vec2::ZERO, 4.0, 0.5).unwrap();
        for _ in 0..10_000 {
            e.update(1.0 / 120.0);
        }
        assert!(e.vel.length() <= TERMINAL_SPEED + 0.01);
    }

    #[test]
    fn test_bounce_elastic_preserves_speed() {
        let mut e = hovering(Vec2::ZERO, 1.0);
        e.vel = Vec2::new(100.0, 0.0);
        // Struck by an entity directly to the right
        e.on_collision(Vec2::new(8.0, 0.0));
        assert!((e.vel.length() - 100.0).abs() < 0.001);
        assert!((e.vel.x - (-100.0)).abs() < 0.001);
    }

    #[test]
    fn test_bounce_absorbed_at_zero_elasticity() {
        let mut e = hovering(Vec2::ZERO, 0.0);
        e.vel = Vec2::new(100.0, 25.0);
        e.on_collision(Vec2::new(8.0, 0.0));
        // Normal is -X: that component is gone, tangential survives
        assert!(e.vel.x.abs() < 0.001);
        assert!((e.vel.y - 25.0).abs() < 0.001);
    }

    #[test]
    fn test_bounce_coincident_centers_is_noop() {
        let mut e = hovering(Vec2::new(5.0, 5.0), 1.0);
        e.vel = Vec2::new(40.0, 0.0);
        e.on_collision(Vec2::new(5.0, 5.0));
        assert_eq!(e.vel, Vec2::new(40.0, 0.0));
    }

    #[test]
    fn test_shape_tracks_position() {
        let mut e = Enemy::new(0, EnemyKind::Faller, Vec2::new(1.0, 2.0), 4.0, 0.5).unwrap();
        e.update(0.25);
        assert_eq!(e.shape().center(), e.pos());
    }
}
