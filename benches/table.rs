use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pairtable::twobody::{RadialTwobody, ReactionField, ShiftedPower};
use pairtable::{PotentialTable, TableParameters};

/// Single-distance benchmarks
fn bench_terms_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("single");
    let r: f64 = 1.05;

    let rf = ReactionField::new(2.0, 80.0, 1.2);
    group.bench_function("ReactionField", |b| b.iter(|| rf.potential(black_box(r))));

    let plain = ShiftedPower::new(12.0, 1.2, -1.0);
    group.bench_function("Power_unshifted", |b| {
        b.iter(|| plain.potential(black_box(r)))
    });

    let shifted = ShiftedPower::new(12.0, 1.2, 0.9);
    group.bench_function("Power_shifted", |b| {
        b.iter(|| shifted.potential(black_box(r)))
    });
    group.bench_function("Power_shifted_force", |b| {
        b.iter(|| shifted.force(black_box(r)))
    });

    group.finish();
}

/// Generate test distances between 0.5 and 1.2
fn generate_distances(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 0.5 + 0.7 * (i as f64) / (n as f64))
        .collect()
}

/// Batch benchmarks to probe vectorization
fn bench_terms_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let n_pairs = 10000;
    let distances = generate_distances(n_pairs);

    let shifted = ShiftedPower::new(6.0, 1.2, 0.9);
    group.bench_with_input(
        BenchmarkId::new("Power_shifted", n_pairs),
        &distances,
        |b, dists| b.iter(|| dists.iter().map(|&r| shifted.potential(r)).sum::<f64>()),
    );

    let rf = ReactionField::new(2.0, 80.0, 1.2);
    group.bench_with_input(
        BenchmarkId::new("ReactionField", n_pairs),
        &distances,
        |b, dists| b.iter(|| dists.iter().map(|&r| rf.potential(r)).sum::<f64>()),
    );

    group.finish();
}

/// Full table generation and formatting
fn bench_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("table");
    let parameters = TableParameters::new(2.0, 80.0, 1.2, 6.0, 12.0, 1.2, 0.9);

    group.bench_function("generate", |b| {
        b.iter(|| PotentialTable::generate(black_box(&parameters)))
    });

    let table = PotentialTable::generate(&parameters).unwrap();
    group.bench_function("format", |b| {
        b.iter(|| pairtable::format::table(black_box(&parameters), &table))
    });

    group.finish();
}

criterion_group!(benches, bench_terms_single, bench_terms_batch, bench_table);
criterion_main!(benches);
