//! `GrowableArray` performance benchmarks.
//!
//! Measures:
//! - Sequential `add` with growth from the default capacity
//! - Bulk `add_range` sized in one step
//! - Front insertion and removal (worst-case shifting)
//! - Rendering with `Display`

use collection::{GrowableArray, GrowthPolicy};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for size in [100, 10_000, 1_000_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut array = GrowableArray::new();
                for i in 0..size {
                    array.add(black_box(i));
                }
                array
            });
        });
    }

    group.finish();
}

fn bench_add_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_range");

    for size in [100, 10_000, 1_000_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut array = GrowableArray::new();
                array.add_range(0..black_box(size));
                array
            });
        });
    }

    group.finish();
}

fn bench_initial_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("initial_capacity");

    for initial in [1, 16, 4096].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(initial), initial, |b, &initial| {
            let policy = GrowthPolicy::new(initial);
            b.iter(|| {
                let mut array = GrowableArray::with_policy(policy);
                for i in 0..10_000u32 {
                    array.add(black_box(i));
                }
                array
            });
        });
    }

    group.finish();
}

fn bench_front_insert_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("front_insert_remove");

    for size in [100, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut array = GrowableArray::from_items(0..size);
            b.iter(|| {
                array.insert_at(0, black_box(size)).unwrap();
                black_box(array.remove_at(0).unwrap())
            });
        });
    }

    group.finish();
}

fn bench_to_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_string");

    for size in [10, 1_000].iter() {
        let array = GrowableArray::from_items(0..*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(array.to_string()));
        });
    }

    let nested = GrowableArray::from_items((0..100).map(|row| GrowableArray::from_items(0..row)));
    group.bench_function("nested_100", |b| b.iter(|| black_box(nested.to_string())));

    group.finish();
}

criterion_group!(
    benches,
    bench_add,
    bench_add_range,
    bench_initial_capacity,
    bench_front_insert_remove,
    bench_to_string
);
criterion_main!(benches);
