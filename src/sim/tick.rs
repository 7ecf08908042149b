//! The simulation tick
//!
//! One tick is an atomic, synchronous unit of work: update every entity,
//! detect and resolve collisions in a stable order, cull removed entities,
//! then project a snapshot. Given the same initial state and dt sequence,
//! the snapshot and event sequences are identical run-to-run.

use super::state::{Event, EventKind, Phase, Simulation, Snapshot};

/// Everything one tick produces for external collaborators
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutput {
    /// Renderer projection of the surviving entities, ordered by id
    pub snapshot: Snapshot,
    /// Discrete events for UI/audio/scoring
    pub events: Vec<Event>,
}

impl Simulation {
    /// Advance the simulation by `dt` seconds
    ///
    /// Valid only while Running; ticking in any other phase is a caller
    /// sequencing bug and fatal. `dt == 0` moves nothing but still resolves
    /// overlapping pairs.
    ///
    /// # Panics
    /// If the simulation is not Running.
    pub fn tick(&mut self, dt: f32) -> TickOutput {
        assert!(
            self.phase() == Phase::Running,
            "Simulation::tick called in phase {:?}; only Running may tick",
            self.phase()
        );
        self.ticks += 1;

        // 1. Motion update, in id order
        for enemy in &mut self.enemies {
            if enemy.alive {
                enemy.update(dt);
            }
        }

        // 2. Pairwise detection over the post-update shapes. Pairs are
        // recorded before any resolution so one bounce cannot create or
        // mask another within the same tick.
        let mut pairs = Vec::new();
        for i in 0..self.enemies.len() {
            for j in (i + 1)..self.enemies.len() {
                if self.enemies[i].alive
                    && self.enemies[j].alive
                    && self.enemies[i].shape().intersects(self.enemies[j].shape())
                {
                    pairs.push((i, j));
                }
            }
        }

        // 3. Resolution, lower index first within each pair
        let mut events = Vec::new();
        for (i, j) in pairs {
            let center_i = self.enemies[i].pos();
            let center_j = self.enemies[j].pos();
            self.enemies[i].on_collision(center_j);
            self.enemies[j].on_collision(center_i);

            let (id_i, id_j) = (self.enemies[i].id, self.enemies[j].id);
            events.push(Event { id: id_i, kind: EventKind::Collision { other: id_j } });
            events.push(Event { id: id_j, kind: EventKind::Collision { other: id_i } });
        }

        // 4. Cull: externally killed entities and centers outside bounds
        let bounds = self.bounds();
        let mut removed = Vec::new();
        for enemy in &mut self.enemies {
            if enemy.alive && !bounds.contains(enemy.pos()) {
                enemy.kill();
                removed.push(Event { id: enemy.id, kind: EventKind::LeftBounds });
            } else if !enemy.alive {
                removed.push(Event { id: enemy.id, kind: EventKind::Destroyed });
            }
        }
        self.enemies.retain(|e| e.alive);

        // Collision events must only name entities present in this tick's
        // snapshot; removal events are the one documented exception.
        if !removed.is_empty() {
            events.retain(|ev| self.enemies.iter().any(|e| e.id == ev.id));
        }
        events.extend(removed);

        if !events.is_empty() {
            log::debug!("tick {}: {} events", self.ticks, events.len());
        }

        // 5. Snapshot the survivors
        TickOutput { snapshot: self.snapshot(), events }
    }
}
