//! Headless demo driver
//!
//! Loads a built-in level, runs the simulation at the fixed timestep, and
//! logs events plus the final snapshot. Stands in for the external
//! renderer/UI shell.

use hoverfall::consts::SIM_DT;
use hoverfall::sim::{LevelRegistry, Simulation};

/// Ticks to run (10 seconds at 120 Hz)
const DEMO_TICKS: u32 = 1200;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let registry = LevelRegistry::builtin();
    let keys: Vec<_> = registry.keys().collect();
    log::info!("Available levels: {keys:?}");

    let mut sim = Simulation::new();
    if let Err(e) = sim.load(&registry, "level-2") {
        log::error!("Failed to load level: {e}");
        return;
    }

    let mut last = None;
    for _ in 0..DEMO_TICKS {
        let out = sim.tick(SIM_DT);
        for event in &out.events {
            log::info!("tick {}: entity {} -> {:?}", out.snapshot.tick, event.id, event.kind);
        }
        last = Some(out.snapshot);
    }

    if let Some(snapshot) = last {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => log::info!("Final snapshot:\n{json}"),
            Err(e) => log::error!("Snapshot serialization failed: {e}"),
        }
    }

    sim.end();
}
