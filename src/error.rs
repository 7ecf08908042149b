//! Error types for level loading and entity construction
//!
//! All validation happens at load time, before any enemy is constructed;
//! the tick loop itself never raises. Misuse of the `Simulation` state
//! machine (ticking while not running) is a caller sequencing bug and
//! panics instead of returning one of these.

use thiserror::Error;

/// Errors surfaced by level lookup and enemy construction
#[derive(Debug, Error)]
pub enum SimError {
    /// Unknown level key passed to the registry
    #[error("level not found: {0:?}")]
    LevelNotFound(String),

    /// Enemy spec with a non-positive hit circle radius
    #[error("enemy radius {radius} must be strictly positive")]
    InvalidRadius { radius: f32 },

    /// Enemy spec with an elasticity outside [0, 1]
    #[error("elasticity {elasticity} must be within [0, 1]")]
    ElasticityOutOfRange { elasticity: f32 },

    /// Enemy spec with a type id no variant claims
    #[error("unrecognized enemy type id {type_id}")]
    UnknownTypeId { type_id: u8 },

    /// Level data document that failed to parse
    #[error("malformed level data: {0}")]
    MalformedLevelData(#[from] serde_json::Error),
}
