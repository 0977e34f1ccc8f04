//! Criterion micro-benchmarks for stencils and target search.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use swarmfield_agents::TargetSet;
use swarmfield_core::GridPos;
use swarmfield_propagators::{ChemotacticAdvection, GrayScott, GrayScottParams, ScalarDiffusion};
use swarmfield_space::{gradient, laplacian, Field};
use swarmfield_test_utils::{gray_scott_spill, wrap_grid};

/// Laplacian of a 100x100 periodic field.
fn bench_laplacian_10k(c: &mut Criterion) {
    let (u, _) = gray_scott_spill(100, 7);

    c.bench_function("laplacian_10k", |b| {
        b.iter(|| black_box(laplacian(black_box(&u))));
    });
}

/// Central-difference gradient of a 100x100 periodic field.
fn bench_gradient_10k(c: &mut Criterion) {
    let (_, v) = gray_scott_spill(100, 7);

    c.bench_function("gradient_10k", |b| {
        b.iter(|| black_box(gradient(black_box(&v))));
    });
}

/// One explicit diffusion step with a line of sources.
fn bench_diffusion_step_10k(c: &mut Criterion) {
    let grid = wrap_grid(100, 100);
    let mut f = Field::filled(grid, 0.0);
    let sources: Vec<GridPos> = (20..80).map(|r| GridPos::new(r, 50)).collect();
    let diffusion = ScalarDiffusion::builder()
        .coefficient(0.1)
        .sources(sources)
        .clamp(0.0, 1.0)
        .build()
        .unwrap();

    c.bench_function("diffusion_step_10k", |b| {
        b.iter(|| {
            diffusion.step(&mut f);
            black_box(&f);
        });
    });
}

/// One Gray-Scott update on the reference spill.
fn bench_gray_scott_step_10k(c: &mut Criterion) {
    let (mut u, mut v) = gray_scott_spill(100, 7);
    let reaction = GrayScott::new(GrayScottParams::default()).unwrap();

    c.bench_function("gray_scott_step_10k", |b| {
        b.iter(|| {
            reaction.step(&mut u, &mut v).unwrap();
            black_box(&v);
        });
    });
}

/// One chemotactic advection update against a fixed signal.
fn bench_advection_step_10k(c: &mut Criterion) {
    let grid = wrap_grid(100, 100);
    let signal = Field::from_fn(grid, |p| (p.col as f64 / 100.0).sin());
    let mut density = Field::filled(grid, 0.3);
    let advection = ChemotacticAdvection::new(0.3).unwrap();

    c.bench_function("advection_step_10k", |b| {
        b.iter(|| {
            advection.step(&mut density, &signal).unwrap();
            black_box(&density);
        });
    });
}

/// 1000 nearest-target queries against a 197-cell disc.
fn bench_nearest_target_1000(c: &mut Criterion) {
    let grid = wrap_grid(100, 100);
    let tissue = Field::from_fn(grid, |p| {
        if p.distance_sq(GridPos::new(50, 50)) <= 64 {
            2.0
        } else {
            1.0
        }
    });
    let targets = TargetSet::from_field(&tissue, |v| v == 2.0);
    let probes: Vec<GridPos> = (0u64..1000)
        .map(|i| {
            let r = (i.wrapping_mul(6364136223846793007) % 100) as usize;
            let c = (i.wrapping_mul(1442695040888963407) % 100) as usize;
            GridPos::new(r, c)
        })
        .collect();

    c.bench_function("nearest_target_1000", |b| {
        b.iter(|| {
            for &p in &probes {
                black_box(targets.nearest(p));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_laplacian_10k,
    bench_gradient_10k,
    bench_diffusion_step_10k,
    bench_gray_scott_step_10k,
    bench_advection_step_10k,
    bench_nearest_target_1000
);
criterion_main!(benches);
