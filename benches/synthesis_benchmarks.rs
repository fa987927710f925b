//! Criterion benchmarks for the synthesis pipeline (§10.5), grounded on the
//! teacher's `benches/pla_benchmarks.rs` (`criterion`, `harness = false`).

use algebraic_factor::cube::Cube;
use algebraic_factor::expr::Expr;
use algebraic_factor::literal::Literal;
use algebraic_factor::{synthesize, SynthesisConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn cube(lits: &[&str]) -> Cube {
    Cube::from_literals(lits.iter().map(|s| Literal::new(*s)))
}

fn expr(cubes: &[&[&str]]) -> Expr {
    Expr::from_cubes(cubes.iter().map(|c| cube(c)))
}

fn small_common_factor() -> Expr {
    expr(&[&["a", "b"], &["a", "c"], &["a", "d"]])
}

fn two_rectangle_candidates() -> Expr {
    expr(&[&["a", "b"], &["a", "c"], &["b", "d"], &["c", "d"]])
}

fn wide_shared_structure() -> Expr {
    expr(&[
        &["h"],
        &["b", "f", "g"],
        &["d", "f", "a"],
        &["d", "f", "b"],
        &["d", "f", "c"],
        &["e", "f", "a"],
        &["e", "f", "b"],
        &["e", "f", "c"],
        &["d", "g"],
        &["g", "e"],
    ])
}

fn bench_synthesize(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesize");

    group.bench_function("small_common_factor", |b| {
        let input = small_common_factor();
        b.iter(|| synthesize(black_box(&input)));
    });

    group.bench_function("two_rectangle_candidates", |b| {
        let input = two_rectangle_candidates();
        b.iter(|| synthesize(black_box(&input)));
    });

    group.bench_function("wide_shared_structure", |b| {
        let input = wide_shared_structure();
        b.iter(|| synthesize(black_box(&input)));
    });

    group.finish();
}

fn bench_rectangle_cap(c: &mut Criterion) {
    let mut group = c.benchmark_group("rectangle_cap");
    let input = wide_shared_structure();

    for cap in [1usize, 10, 100, 10_000] {
        group.bench_function(format!("cap_{cap}"), |b| {
            let config = SynthesisConfig {
                rectangle_cap: cap,
                all_kernels: true,
            };
            b.iter(|| algebraic_factor::synthesize_with_config(black_box(&input), config));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_synthesize, bench_rectangle_cap);
criterion_main!(benches);
