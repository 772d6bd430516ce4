//! Criterion micro-benchmarks for the curl stencil and RK4 time stepping.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use foundry_bench::{reference_profile, ready_to_step};
use foundry_core::SimTime;
use foundry_solver::{curl, CurlSource, FieldTimeStepper, StepperConfig};

/// Benchmark: curl of E(0) at every point of the reference lattice.
fn bench_curl_electric(c: &mut Criterion) {
    let (grid, _) = ready_to_step(reference_profile());
    c.bench_function("curl_electric_reference", |b| {
        b.iter(|| {
            for p in grid.points() {
                black_box(curl(&grid, CurlSource::Electric, p, SimTime::ZERO).unwrap());
            }
        });
    });
}

/// Benchmark: one full B, E, J step on the reference lattice.
fn bench_advance_one_step(c: &mut Criterion) {
    let (grid, stepper) = ready_to_step(reference_profile());
    c.bench_function("advance_one_step_reference", |b| {
        b.iter_batched(
            || (grid.clone(), stepper.clone()),
            |(mut grid, mut stepper)| black_box(stepper.advance_one_step(&mut grid).unwrap()),
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: initial electric field from relaxed voltages.
fn bench_initial_field(c: &mut Criterion) {
    let (grid, _) = ready_to_step(reference_profile());
    c.bench_function("initial_field_reference", |b| {
        b.iter_batched(
            || {
                let mut fresh = reference_profile();
                for (dst, src) in fresh.points_mut().iter_mut().zip(grid.points()) {
                    dst.set_voltage(src.voltage());
                }
                fresh
            },
            |mut fresh| {
                let mut stepper = FieldTimeStepper::new(StepperConfig::default()).unwrap();
                stepper.compute_initial_electric_field(&mut fresh).unwrap();
                black_box(fresh)
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_curl_electric,
    bench_advance_one_step,
    bench_initial_field
);
criterion_main!(benches);
