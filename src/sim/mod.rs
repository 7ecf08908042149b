//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed or caller-supplied timestep, no time sources of its own
//! - No randomness (levels are authored data)
//! - Stable iteration order (by entity id / index)
//! - No rendering or platform dependencies

pub mod enemy;
pub mod level;
pub mod shape;
pub mod state;
pub mod tick;
pub mod vector;

pub use enemy::{Enemy, EnemyKind, TYPE_FALLER, TYPE_HOVERING, TYPE_SENTRY};
pub use level::{Bounds, EnemySpec, LevelDefinition, LevelRegistry};
pub use shape::{Circle, Shape};
pub use state::{EntitySnapshot, Event, EventKind, Phase, Simulation, Snapshot};
pub use tick::TickOutput;
pub use vector::{collision_normal, reflect_with_elasticity};
