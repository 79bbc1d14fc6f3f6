//! Load benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::Cursor;
use tabledb_bench::{generate_source, TABLE};
use tabledb_core::Database;

/// Benchmark parsing and installing a table.
fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    for rows in [1_000, 10_000, 100_000].iter() {
        let source = generate_source(*rows, 100);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &source, |b, source| {
            let db = Database::new();
            b.iter(|| {
                db.load_from_reader(TABLE, Cursor::new(black_box(source.as_bytes())))
                    .unwrap();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_load);
criterion_main!(benches);
