//! Benchmarks for `diffbench_differentiate`'s target functions and stencils.
#![allow(unused_attributes, unused_crate_dependencies)]

use criterion::{black_box as b, criterion_group, BenchmarkId, Criterion};
use function_name::named;

use diffbench_criterion_differentiate::orders;
use diffbench_differentiate::{stencil::Stencil, Target, TargetKind};

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = eval, stencil_central,
}

/// Benchmark [`Target::eval`] of every [`TargetKind`].
#[named]
fn eval(c: &mut Criterion) {
    let mut group = c.benchmark_group(function_name!());

    for kind in TargetKind::ALL {
        let target = kind.build();
        group.bench_with_input(BenchmarkId::from_parameter(kind), &target, |bench, target| {
            bench.iter(|| b(target.eval(b(1.0))));
        });
    }

    group.finish();
}

/// Benchmark [`Stencil::central`] at each order.
#[named]
fn stencil_central(c: &mut Criterion) {
    let mut group = c.benchmark_group(function_name!());

    for order in orders() {
        group.bench_with_input(BenchmarkId::from_parameter(order), &order, |bench, &order| {
            bench.iter(|| b(Stencil::central(b(order))));
        });
    }

    group.finish();
}
