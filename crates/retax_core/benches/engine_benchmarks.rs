//! Criterion benchmarks for retax_core evaluation
//!
//! Run with: cargo bench -p retax_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use retax_core::{ScenarioInputs, depreciation_schedule, evaluate};

fn bench_depreciation_schedule(c: &mut Criterion) {
    let profile = ScenarioInputs::default().property_profile();

    let mut group = c.benchmark_group("depreciation_schedule");
    for years in [10u32, 40] {
        group.bench_with_input(BenchmarkId::from_parameter(years), &years, |b, &years| {
            b.iter(|| depreciation_schedule(black_box(&profile), black_box(0.4), years));
        });
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let inputs = ScenarioInputs {
        simulate_exchange: true,
        reinvested_value: 12_000_000.0,
        modeling_years: 40,
        ..ScenarioInputs::default()
    };

    c.bench_function("evaluate_full_scenario", |b| {
        b.iter(|| evaluate(black_box(&inputs)));
    });
}

criterion_group!(benches, bench_depreciation_schedule, bench_evaluate);
criterion_main!(benches);
