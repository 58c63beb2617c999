//! Criterion benchmarks for the per-frame geometry queries.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p ternary

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ternary::api::{guide_lattice, interior_points, DiagramCfg, ProjectionMode};

fn bench_solve(c: &mut Criterion) {
    let tri = DiagramCfg::default().triangle().unwrap();
    let points = interior_points(&tri, 1024, 43).unwrap();
    let mut group = c.benchmark_group("solve");
    for mode in ProjectionMode::ALL {
        group.bench_with_input(BenchmarkId::new("solve_composition", mode), &mode, |b, &mode| {
            b.iter(|| {
                for p in &points {
                    let _ = black_box(tri.solve_composition(*p, mode));
                }
            })
        });
    }
    group.bench_function("contains", |b| {
        b.iter(|| points.iter().filter(|p| tri.contains(**p)).count())
    });
    group.finish();
}

fn bench_lattice(c: &mut Criterion) {
    let tri = DiagramCfg::default().triangle().unwrap();
    let mut group = c.benchmark_group("guide_lattice");
    for &n in &[10usize, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| guide_lattice(&tri, n).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve, bench_lattice);
criterion_main!(benches);
