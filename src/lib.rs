//! Hoverfall - a deterministic 2D enemy simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (shapes, enemies, levels, tick)
//! - `error`: Load-time validation and lookup errors
//!
//! Rendering, input handling, and the surrounding application shell are
//! external collaborators; this crate only consumes level data and produces
//! per-tick snapshots and events.

pub mod error;
pub mod sim;

pub use error::SimError;
pub use sim::{Simulation, TickOutput};

/// Simulation tuning constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Hovering enemy bob amplitude (world units from the home position)
    pub const HOVER_AMPLITUDE: f32 = 6.0;
    /// Hovering enemy bob angular speed (radians per second)
    pub const HOVER_ANGULAR_SPEED: f32 = 2.0;

    /// Exponential decay rate for collision knockback (per second)
    pub const KNOCKBACK_DECAY: f32 = 4.0;

    /// Downward acceleration for gravity-bound enemies (units/s²)
    pub const GRAVITY: f32 = 240.0;
    /// Speed cap for gravity-bound enemies
    pub const TERMINAL_SPEED: f32 = 600.0;
}
