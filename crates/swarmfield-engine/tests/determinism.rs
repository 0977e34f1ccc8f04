//! Equal configs give bit-identical state at every tick.

use swarmfield_engine::{
    run_capturing, HealingConfig, ManufacturingConfig, OncologyConfig, RemediationConfig,
    RepairConfig, Scenario, ScenarioConfig, SimulationLoop,
};

fn assert_lockstep<C: ScenarioConfig>(config: C) {
    let mut a = SimulationLoop::<C::Scenario>::new(config.clone()).unwrap();
    let mut b = SimulationLoop::<C::Scenario>::new(config).unwrap();
    assert_eq!(a.snapshot(), b.snapshot());
    while !a.is_complete() {
        let ta = a.step().unwrap();
        let tb = b.step().unwrap();
        assert_eq!(ta, tb);
        assert_eq!(
            a.snapshot(),
            b.snapshot(),
            "{} diverged at tick {}",
            <C::Scenario as Scenario>::NAME,
            ta.0
        );
    }
    assert!(b.is_complete());
}

#[test]
fn remediation_is_deterministic() {
    assert_lockstep(RemediationConfig {
        rows: 32,
        cols: 32,
        ticks: 60,
        seed: 11,
        ..RemediationConfig::default()
    });
}

#[test]
fn healing_is_deterministic() {
    assert_lockstep(HealingConfig {
        ticks: 40,
        seed: 3,
        ..HealingConfig::default()
    });
}

#[test]
fn repair_is_deterministic() {
    assert_lockstep(RepairConfig {
        seed: 5,
        ..RepairConfig::default()
    });
}

#[test]
fn oncology_is_deterministic_with_limited_sensing() {
    assert_lockstep(OncologyConfig {
        ticks: 120,
        seed: 8,
        sensing_radius: Some(4),
        ..OncologyConfig::default()
    });
}

#[test]
fn manufacturing_is_deterministic() {
    assert_lockstep(ManufacturingConfig {
        seed: 21,
        ..ManufacturingConfig::default()
    });
}

#[test]
fn different_seeds_diverge() {
    let a = run_capturing(OncologyConfig::default(), &[0]).unwrap();
    let b = run_capturing(
        OncologyConfig {
            seed: 1,
            ..OncologyConfig::default()
        },
        &[0],
    )
    .unwrap();
    assert_ne!(a.frames[0].agents, b.frames[0].agents);
}

#[test]
fn reset_replays_the_same_trajectory() {
    let cfg = RepairConfig {
        ticks: 20,
        ..RepairConfig::default()
    };
    let mut sim = SimulationLoop::<<RepairConfig as ScenarioConfig>::Scenario>::new(cfg).unwrap();
    sim.run_to_completion().unwrap();
    let first = sim.snapshot();
    sim.reset(sim.seed()).unwrap();
    sim.run_to_completion().unwrap();
    assert_eq!(sim.snapshot(), first);
}
