use criterion::{criterion_group, criterion_main, Criterion};
use platrank::{reference, run_analysis};

fn bench_full_pipeline(c: &mut Criterion) {
    let matrix = reference::reference_matrix();
    let weights = reference::default_hierarchical_weights();

    c.bench_function("run_analysis_reference_dataset", |b| {
        b.iter(|| run_analysis(&matrix, &weights).unwrap())
    });
}

fn bench_weight_composition(c: &mut Criterion) {
    let dimensions = reference::default_dimension_weights();
    let metrics = reference::default_metric_weights();

    c.bench_function("compose_hierarchical_defaults", |b| {
        b.iter(|| platrank::compose_hierarchical(&dimensions, &metrics))
    });
}

criterion_group!(benches, bench_full_pipeline, bench_weight_composition);
criterion_main!(benches);
