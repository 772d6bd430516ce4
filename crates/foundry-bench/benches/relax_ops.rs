//! Criterion micro-benchmarks for voltage relaxation and grid traversal.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use foundry_bench::{reference_profile, relaxed, stress_profile};
use foundry_io::voltage_digest;
use foundry_solver::VoltageRelaxation;

/// Benchmark: one Gauss–Seidel sweep over the 9261-point reference lattice
/// from the unrelaxed state.
fn bench_sweep_reference(c: &mut Criterion) {
    let relaxation = VoltageRelaxation::default();
    c.bench_function("relax_sweep_reference", |b| {
        b.iter_batched(
            reference_profile,
            |mut grid| black_box(relaxation.sweep(&mut grid)),
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: one sweep over the 68921-point stress lattice.
fn bench_sweep_stress(c: &mut Criterion) {
    let relaxation = VoltageRelaxation::default();
    c.bench_function("relax_sweep_stress", |b| {
        b.iter_batched(
            stress_profile,
            |mut grid| black_box(relaxation.sweep(&mut grid)),
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: the convergence-check sweep on an already relaxed lattice.
fn bench_converged_sweep(c: &mut Criterion) {
    let relaxation = VoltageRelaxation::default();
    let mut grid = relaxed(reference_profile());
    c.bench_function("relax_converged_sweep_reference", |b| {
        b.iter(|| black_box(relaxation.sweep(&mut grid)));
    });
}

/// Benchmark: neighbour lookup for every point of the reference lattice.
fn bench_neighbours(c: &mut Criterion) {
    let grid = reference_profile();
    c.bench_function("neighbours_reference", |b| {
        b.iter(|| {
            for p in grid.points() {
                black_box(grid.neighbours(p.index()));
            }
        });
    });
}

/// Benchmark: FNV-1a voltage digest of the reference lattice.
fn bench_voltage_digest(c: &mut Criterion) {
    let grid = reference_profile();
    c.bench_function("voltage_digest_reference", |b| {
        b.iter(|| black_box(voltage_digest(&grid)));
    });
}

criterion_group!(
    benches,
    bench_sweep_reference,
    bench_sweep_stress,
    bench_converged_sweep,
    bench_neighbours,
    bench_voltage_digest
);
criterion_main!(benches);
