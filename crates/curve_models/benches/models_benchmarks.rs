//! Criterion benchmarks for parametric model evaluation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use curve_core::curves::YieldCurve;
use curve_models::curves::ParametricCurve;
use curve_models::rates::{NelsonSiegelModel, ParametricRateModel, SvenssonModel};

/// Benchmark Nelson-Siegel model evaluation.
fn bench_nelson_siegel(c: &mut Criterion) {
    let mut group = c.benchmark_group("nelson_siegel");
    let model = NelsonSiegelModel::new(0.04_f64, -0.01, 0.02, 1.5).unwrap();

    group.bench_function("inst_forward", |b| {
        b.iter(|| model.inst_forward(black_box(5.0)));
    });

    group.bench_function("rate", |b| {
        b.iter(|| model.rate(black_box(1.0), black_box(5.0)));
    });

    let curve = ParametricCurve::new(model);
    group.bench_function("discount_factor", |b| {
        b.iter(|| curve.discount_factor(black_box(5.0)).unwrap());
    });

    group.finish();
}

/// Benchmark Svensson model evaluation.
fn bench_svensson(c: &mut Criterion) {
    let mut group = c.benchmark_group("svensson");
    let model = SvenssonModel::new(0.04_f64, -0.01, 0.02, 0.015, 1.5, 4.0).unwrap();

    group.bench_function("inst_forward", |b| {
        b.iter(|| model.inst_forward(black_box(5.0)));
    });

    group.bench_function("rate", |b| {
        b.iter(|| model.rate(black_box(1.0), black_box(5.0)));
    });

    let curve = ParametricCurve::new(model);
    group.bench_function("discount_factor", |b| {
        b.iter(|| curve.discount_factor(black_box(5.0)).unwrap());
    });

    group.finish();
}

/// Benchmark a curve strip: discount factors across a maturity grid.
fn bench_curve_strip(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_strip");
    let maturities: Vec<f64> = (1..=120).map(|i| i as f64 / 4.0).collect();

    let ns = ParametricCurve::new(NelsonSiegelModel::new(0.04_f64, -0.01, 0.02, 1.5).unwrap());
    let sv = ParametricCurve::new(
        SvenssonModel::new(0.04_f64, -0.01, 0.02, 0.015, 1.5, 4.0).unwrap(),
    );

    group.bench_with_input(
        BenchmarkId::new("discount_factors", "nelson_siegel"),
        &ns,
        |b, curve| {
            b.iter(|| {
                for &t in &maturities {
                    let _ = curve.discount_factor(black_box(t)).unwrap();
                }
            });
        },
    );

    group.bench_with_input(
        BenchmarkId::new("discount_factors", "svensson"),
        &sv,
        |b, curve| {
            b.iter(|| {
                for &t in &maturities {
                    let _ = curve.discount_factor(black_box(t)).unwrap();
                }
            });
        },
    );

    group.finish();
}

criterion_group!(benches, bench_nelson_siegel, bench_svensson, bench_curve_strip);
criterion_main!(benches);
