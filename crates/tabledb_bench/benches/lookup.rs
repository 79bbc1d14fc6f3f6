//! Selection benchmarks: full scan against index lookup.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tabledb_bench::{loaded_database, TABLE};

/// Benchmark selections on an unindexed column.
fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_scan");

    for rows in [1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), rows, |b, &rows| {
            let db = loaded_database(rows, 100);
            b.iter(|| black_box(db.select_rows(TABLE, "group", black_box("g42"))));
        });
    }
    group.finish();
}

/// Benchmark selections on an indexed column.
fn bench_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_index");

    for rows in [1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), rows, |b, &rows| {
            let db = loaded_database(rows, 100);
            db.create_index("group").unwrap();
            b.iter(|| black_box(db.select_rows(TABLE, "group", black_box("g42"))));
        });
    }
    group.finish();
}

/// Benchmark index construction.
fn bench_create_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_index");

    for cardinality in [10, 1_000, 100_000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(cardinality),
            cardinality,
            |b, &cardinality| {
                let db = loaded_database(100_000, cardinality);
                b.iter(|| {
                    db.create_index("group").unwrap();
                    db.drop_index("group").unwrap();
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_scan, bench_index, bench_create_index);
criterion_main!(benches);
