//! Encoding and serialization throughput benchmarks.
//!
//! Run with: `cargo bench --bench encode`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use sparsetab::io::{write_svmlight, DumpOptions};
use sparsetab::testing::{cat_names, num_names, random_frame, random_targets};
use sparsetab::to_csr;

fn bench_to_csr(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode/to_csr");

    for n_rows in [1_000usize, 10_000, 100_000] {
        let frame = random_frame(n_rows, 3, 2, 42);
        let cats = cat_names(3);
        let nums = num_names(2);
        let cat_refs: Vec<&str> = cats.iter().map(String::as_str).collect();
        let num_refs: Vec<&str> = nums.iter().map(String::as_str).collect();

        group.throughput(Throughput::Elements(n_rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n_rows), &n_rows, |b, _| {
            b.iter(|| to_csr(black_box(&frame), &cat_refs, &num_refs).unwrap());
        });
    }

    group.finish();
}

fn bench_write_svmlight(c: &mut Criterion) {
    let mut group = c.benchmark_group("io/write_svmlight");

    for n_rows in [1_000usize, 10_000, 100_000] {
        let frame = random_frame(n_rows, 3, 2, 42);
        let cats = cat_names(3);
        let nums = num_names(2);
        let cat_refs: Vec<&str> = cats.iter().map(String::as_str).collect();
        let num_refs: Vec<&str> = nums.iter().map(String::as_str).collect();

        let matrix = to_csr(&frame, &cat_refs, &num_refs).unwrap();
        let targets = random_targets(n_rows, 42);
        let options = DumpOptions::default();

        group.throughput(Throughput::Elements(n_rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n_rows), &n_rows, |b, _| {
            let mut buf = Vec::with_capacity(matrix.nnz() * 32);
            b.iter(|| {
                buf.clear();
                write_svmlight(black_box(&matrix), &targets, &mut buf, &options).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_to_csr, bench_write_svmlight);
criterion_main!(benches);
