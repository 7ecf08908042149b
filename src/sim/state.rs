//! Simulation state machine, snapshots, and events
//!
//! The `Simulation` exclusively owns the live entity set for one loaded
//! level. Nothing else reads or mutates it while Running, so no locking
//! discipline exists anywhere in the core.

use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::level::{Bounds, LevelRegistry};
use super::shape::{Circle, Shape};
use crate::error::SimError;

/// Lifecycle of one level instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// No level loaded
    #[default]
    Idle,
    /// Live entity set populated, ticking allowed
    Running,
    /// Level unloaded, entity set released
    Ended,
}

/// One entity's renderer-facing projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub id: u32,
    pub type_id: u8,
    pub circle: Circle,
}

/// Per-tick read-only projection of simulation state, ordered by entity id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub entities: Vec<EntitySnapshot>,
}

/// Discrete per-tick event kinds for UI/audio/scoring collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// The entity bounced off another (carries the other participant's id)
    Collision { other: u32 },
    /// The entity's alive flag dropped and it was removed
    Destroyed,
    /// The entity's center left the level bounds and it was removed
    LeftBounds,
}

/// A discrete event affecting one entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub kind: EventKind,
}

/// The live simulation for one loaded level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    phase: Phase,
    level_key: Option<String>,
    bounds: Bounds,
    pub(super) enemies: Vec<Enemy>,
    pub(super) ticks: u64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    /// A fresh simulation in the Idle phase
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            level_key: None,
            bounds: Bounds::new(glam::Vec2::ZERO, glam::Vec2::ZERO),
            enemies: Vec::new(),
            ticks: 0,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Key of the currently loaded level, if any
    pub fn level_key(&self) -> Option<&str> {
        self.level_key.as_deref()
    }

    /// Number of live entities
    pub fn live_count(&self) -> usize {
        self.enemies.len()
    }

    /// Mutable access to a live enemy, for external collaborators that
    /// apply damage (player weapons etc.) between ticks
    pub fn enemy_mut(&mut self, id: u32) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.id == id)
    }

    /// Populate the live entity set from a level and start running
    ///
    /// Valid only in Idle; loading over a running or ended level is a
    /// caller sequencing bug and fatal.
    ///
    /// # Panics
    /// If the simulation is not Idle.
    pub fn load(&mut self, registry: &LevelRegistry, key: &str) -> Result<(), SimError> {
        assert!(
            self.phase == Phase::Idle,
            "Simulation::load called in phase {:?}; only Idle may load",
            self.phase
        );
        let def = registry.get(key)?;
        let enemies = registry.load(key)?;
        log::info!("Loaded level {key:?} with {} enemies", enemies.len());

        self.bounds = def.bounds;
        self.enemies = enemies;
        self.level_key = Some(key.to_owned());
        self.ticks = 0;
        self.phase = Phase::Running;
        Ok(())
    }

    /// Stop running and release the live entity set
    ///
    /// # Panics
    /// If the simulation is not Running.
    pub fn end(&mut self) {
        assert!(
            self.phase == Phase::Running,
            "Simulation::end called in phase {:?}; only Running may end",
            self.phase
        );
        log::info!(
            "Level {:?} ended after {} ticks",
            self.level_key.as_deref().unwrap_or(""),
            self.ticks
        );
        self.enemies.clear();
        self.phase = Phase::Ended;
    }

    /// Build the renderer projection of the current live set
    pub(super) fn snapshot(&self) -> Snapshot {
        let entities = self
            .enemies
            .iter()
            .map(|e| {
                let Shape::Circle(circle) = *e.shape();
                EntitySnapshot {
                    id: e.id,
                    type_id: e.kind.type_id(),
                    circle,
                }
            })
            .collect();
        Snapshot { tick: self.ticks, entities }
    }
}
