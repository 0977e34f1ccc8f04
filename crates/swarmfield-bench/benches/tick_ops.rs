//! Criterion benchmarks for whole simulation ticks.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use swarmfield_bench::{
    healing_profile, remediation_profile, remediation_stress_profile, swarm_profile,
};
use swarmfield_engine::{
    HealingScenario, OncologyScenario, RemediationConfig, RemediationScenario, SimulationLoop,
};

fn bench_remediation_tick_10k(c: &mut Criterion) {
    let mut sim = SimulationLoop::<RemediationScenario>::new(remediation_profile(42)).unwrap();
    sim.step().unwrap();

    c.bench_function("remediation_tick_10k", |b| {
        b.iter(|| {
            if sim.is_complete() {
                sim.reset(42).unwrap();
            }
            black_box(sim.step().unwrap());
        });
    });
}

fn bench_remediation_tick_100k(c: &mut Criterion) {
    let mut sim =
        SimulationLoop::<RemediationScenario>::new(remediation_stress_profile(42)).unwrap();
    sim.step().unwrap();

    c.bench_function("remediation_tick_100k", |b| {
        b.iter(|| {
            if sim.is_complete() {
                sim.reset(42).unwrap();
            }
            black_box(sim.step().unwrap());
        });
    });
}

fn bench_healing_tick(c: &mut Criterion) {
    let mut sim = SimulationLoop::<HealingScenario>::new(healing_profile(42)).unwrap();

    c.bench_function("healing_tick_3600", |b| {
        b.iter(|| {
            if sim.is_complete() {
                sim.reset(42).unwrap();
            }
            black_box(sim.step().unwrap());
        });
    });
}

fn bench_oncology_tick_1000_agents(c: &mut Criterion) {
    let mut sim = SimulationLoop::<OncologyScenario>::new(swarm_profile(200, 1000, 42)).unwrap();

    c.bench_function("oncology_tick_1000_agents", |b| {
        b.iter(|| black_box(sim.step().unwrap()));
    });
}

fn bench_100_ticks_remediation(c: &mut Criterion) {
    c.bench_function("100_ticks_remediation_10k", |b| {
        b.iter(|| {
            let cfg = RemediationConfig {
                ticks: 100,
                ..remediation_profile(42)
            };
            let mut sim = SimulationLoop::<RemediationScenario>::new(cfg).unwrap();
            black_box(sim.run_to_completion().unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_remediation_tick_10k,
    bench_remediation_tick_100k,
    bench_healing_tick,
    bench_oncology_tick_1000_agents,
    bench_100_ticks_remediation
);
criterion_main!(benches);
