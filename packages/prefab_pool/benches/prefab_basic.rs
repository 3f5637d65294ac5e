//! Basic benchmarks for the `prefab_pool` package.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use prefab_pool::PoolRegistry;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

type TestItem = Vec<u64>;

fn test_item() -> TestItem {
    vec![1024; 64]
}

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("pp_cycle");

    group.bench_function("construct_without_pool", |b| {
        let prototype = test_item();

        b.iter(|| {
            drop(black_box(prototype.clone()));
        });
    });

    group.bench_function("acquire_release_warm", |b| {
        let mut registry = PoolRegistry::new();
        let prefab = registry.register_default(test_item());

        // Prime the pool so every iteration reuses an idle instance.
        let instance = registry.acquire(&prefab);
        registry.release(instance);

        b.iter(|| {
            let instance = registry.acquire(black_box(&prefab));
            registry.release(instance);
        });
    });

    group.bench_function("acquire_ten_thousand_cold", |b| {
        b.iter(|| {
            let mut registry = PoolRegistry::new();
            let prefab = registry.register_default(test_item());

            for _ in 0..10_000 {
                let instance = registry.acquire(&prefab);
                registry.release(instance);
            }

            registry
        });
    });

    group.finish();

    let mut mixed_group = c.benchmark_group("pp_prefabs");

    mixed_group.bench_function("one_prefab", |b| {
        let mut registry = PoolRegistry::new();
        let prefab = registry.register_default(test_item());

        b.iter(|| {
            let instances: Vec<_> = (0..100).map(|_| registry.acquire(&prefab)).collect();

            for instance in instances {
                registry.release(instance);
            }
        });
    });

    mixed_group.bench_function("ten_prefabs", |b| {
        let mut registry = PoolRegistry::new();
        let prefabs: Vec<_> = (0..10)
            .map(|_| registry.register_default(test_item()))
            .collect();

        b.iter(|| {
            let instances: Vec<_> = prefabs
                .iter()
                .cycle()
                .take(100)
                .map(|prefab| registry.acquire(prefab))
                .collect();

            for instance in instances {
                registry.release(instance);
            }
        });
    });

    mixed_group.finish();
}
