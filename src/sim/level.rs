//! Level data and the registry that instantiates enemies from it
//!
//! Level definitions are authored or supplied once at process start and
//! read-only afterwards. All spec validation happens in `load`, before any
//! enemy escapes, so the tick loop never sees malformed data.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::enemy::{Enemy, EnemyKind, TYPE_FALLER, TYPE_HOVERING, TYPE_SENTRY};
use crate::error::SimError;

/// Axis-aligned level region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Inclusive containment check
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Declarative description of one enemy, used only at load time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpec {
    pub type_id: u8,
    pub pos: Vec2,
    pub radius: f32,
    pub elasticity: f32,
}

/// One level: key, playable region, and the enemies that populate it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub key: String,
    pub bounds: Bounds,
    pub enemies: Vec<EnemySpec>,
}

/// Ordered collection of level definitions
///
/// Registration order is preserved because the external UI lists levels in
/// the order they were authored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelRegistry {
    levels: Vec<LevelDefinition>,
}

impl LevelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the external level-data document (an ordered JSON array of
    /// level definitions)
    pub fn from_json(data: &str) -> Result<Self, SimError> {
        let levels: Vec<LevelDefinition> = serde_json::from_str(data)?;
        let registry = Self { levels };
        log::info!("Loaded {} level definitions", registry.levels.len());
        Ok(registry)
    }

    /// Add a definition, keeping registration order
    ///
    /// A duplicate key replaces the existing definition in place so the
    /// listing order stays stable.
    pub fn register(&mut self, def: LevelDefinition) {
        if let Some(existing) = self.levels.iter_mut().find(|l| l.key == def.key) {
            *existing = def;
        } else {
            self.levels.push(def);
        }
    }

    /// Look up a level definition by key
    pub fn get(&self, key: &str) -> Result<&LevelDefinition, SimError> {
        self.levels
            .iter()
            .find(|l| l.key == key)
            .ok_or_else(|| SimError::LevelNotFound(key.to_owned()))
    }

    /// Level keys in registration order, for listing/navigation
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.levels.iter().map(|l| l.key.as_str())
    }

    /// Instantiate the enemies for a level, validating every spec first
    ///
    /// Ids are assigned sequentially from 0 in spec order. Any invalid spec
    /// (radius, elasticity, type id) fails the whole load; no partial
    /// entity set is returned.
    pub fn load(&self, key: &str) -> Result<Vec<Enemy>, SimError> {
        let def = self.get(key)?;
        let enemies = def
            .enemies
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let kind = EnemyKind::from_type_id(spec.type_id, spec.pos)?;
                Enemy::new(i as u32, kind, spec.pos, spec.radius, spec.elasticity)
            })
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("Level {key:?}: instantiated {} enemies", enemies.len());
        Ok(enemies)
    }

    /// The crate's authored level set
    ///
    /// Built once at startup and passed around by reference; there is no
    /// ambient global copy.
    pub fn builtin() -> Self {
        let bounds = Bounds::new(Vec2::new(0.0, 0.0), Vec2::new(960.0, 540.0));
        let mut registry = Self::new();

        registry.register(LevelDefinition {
            key: "level-1".to_owned(),
            bounds,
            enemies: vec![
                EnemySpec { type_id: TYPE_HOVERING, pos: Vec2::new(240.0, 180.0), radius: 12.0, elasticity: 0.8 },
                EnemySpec { type_id: TYPE_HOVERING, pos: Vec2::new(480.0, 120.0), radius: 12.0, elasticity: 0.8 },
                EnemySpec { type_id: TYPE_SENTRY, pos: Vec2::new(720.0, 400.0), radius: 18.0, elasticity: 0.2 },
            ],
        });

        registry.register(LevelDefinition {
            key: "level-2".to_owned(),
            bounds,
            enemies: vec![
                EnemySpec { type_id: TYPE_HOVERING, pos: Vec2::new(160.0, 200.0), radius: 12.0, elasticity: 1.0 },
                EnemySpec { type_id: TYPE_FALLER, pos: Vec2::new(400.0, 60.0), radius: 10.0, elasticity: 0.6 },
                EnemySpec { type_id: TYPE_FALLER, pos: Vec2::new(560.0, 40.0), radius: 10.0, elasticity: 0.6 },
                EnemySpec { type_id: TYPE_SENTRY, pos: Vec2::new(800.0, 420.0), radius: 18.0, elasticity: 0.0 },
            ],
        });

        registry.register(LevelDefinition {
            key: "level-3".to_owned(),
            bounds,
            enemies: vec![
                EnemySpec { type_id: TYPE_HOVERING, pos: Vec2::new(120.0, 140.0), radius: 10.0, elasticity: 0.9 },
                EnemySpec { type_id: TYPE_HOVERING, pos: Vec2::new(320.0, 140.0), radius: 10.0, elasticity: 0.9 },
                EnemySpec { type_id: TYPE_HOVERING, pos: Vec2::new(520.0, 140.0), radius: 10.0, elasticity: 0.9 },
                EnemySpec { type_id: TYPE_FALLER, pos: Vec2::new(640.0, 80.0), radius: 14.0, elasticity: 0.5 },
                EnemySpec { type_id: TYPE_SENTRY, pos: Vec2::new(480.0, 480.0), radius: 22.0, elasticity: 0.3 },
            ],
        });

        registry
    }
}
