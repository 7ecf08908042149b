//! Replay determinism: identical initial state plus an identical dt
//! sequence must yield identical snapshot and event sequences.

use hoverfall::consts::SIM_DT;
use hoverfall::sim::{LevelRegistry, Simulation, TickOutput};

fn run(registry: &LevelRegistry, key: &str, dts: &[f32]) -> Vec<TickOutput> {
    let mut sim = Simulation::new();
    sim.load(registry, key).unwrap();
    let outputs = dts.iter().map(|&dt| sim.tick(dt)).collect();
    sim.end();
    outputs
}

#[test]
fn identical_runs_produce_identical_outputs() {
    let registry = LevelRegistry::builtin();

    // Mix of fixed steps, a zero step, and irregular steps
    let mut dts = vec![SIM_DT; 600];
    dts.push(0.0);
    dts.extend([0.003, 0.017, 0.008, 0.021]);
    dts.extend(std::iter::repeat(SIM_DT).take(600));

    for key in registry.keys() {
        let a = run(&registry, key, &dts);
        let b = run(&registry, key, &dts);
        assert_eq!(a, b, "runs diverged for level {key:?}");
    }
}

#[test]
fn zero_dt_tick_moves_nothing() {
    let registry = LevelRegistry::builtin();
    let mut sim = Simulation::new();
    sim.load(&registry, "level-1").unwrap();

    let before = sim.tick(0.0).snapshot;
    let after = sim.tick(0.0).snapshot;
    assert_eq!(before.entities, after.entities);
}
