//! Benchmarks for chain construction and traversal.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use linked_collection::Collection;

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [100u64, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("from_iter", size), &size, |b, &size| {
            b.iter(|| {
                let list: Collection<u64> = (0..size).collect();
                black_box(list)
            });
        });
        group.bench_with_input(BenchmarkId::new("append", size), &size, |b, &size| {
            b.iter(|| {
                let mut list: Collection<u64> = Collection::new();
                list.append(0..size);
                black_box(list)
            });
        });
    }

    group.finish();
}

fn bench_traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");

    for size in [100u64, 1_000, 10_000] {
        let list: Collection<u64> = (0..size).collect();

        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("iter_sum", size), &list, |b, list| {
            b.iter(|| black_box(list.iter().sum::<u64>()));
        });
        group.bench_with_input(BenchmarkId::new("len", size), &list, |b, list| {
            b.iter(|| black_box(list.len()));
        });
    }

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");

    for size in [100u64, 1_000, 10_000] {
        let list: Collection<u64> = (0..size).collect();

        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("clone", size), &list, |b, list| {
            b.iter(|| black_box(list.clone()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_traverse, bench_clone);
criterion_main!(benches);
