use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lru_store::config::LruCacheConfig;
use lru_store::{IndexedLruCache, LruCache};
use std::num::NonZeroUsize;

fn config(cap: usize) -> LruCacheConfig {
    LruCacheConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
    }
}

fn make_lru(cap: usize) -> LruCache<usize, usize> {
    let mut cache = LruCache::init(config(cap));
    for i in 0..cap {
        cache.put(i, i);
    }
    cache
}

fn make_indexed(cap: usize) -> IndexedLruCache<usize, usize> {
    let mut cache = IndexedLruCache::init(config(cap), None);
    for i in 0..cap {
        cache.put(i, i);
    }
    cache
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Cache Operations");

    // The linear store is meant for small capacities; compare it with the
    // indexed store where their ranges overlap.
    for &size in &[8usize, 64, 512] {
        let mut lru = make_lru(size);
        let mut indexed = make_indexed(size);

        group.bench_with_input(BenchmarkId::new("LRU peek hit", size), &size, |b, &size| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(lru.peek(&(i % size)));
                }
            });
        });

        group.bench_with_input(
            BenchmarkId::new("Indexed peek hit", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    for i in 0..100 {
                        black_box(indexed.peek(&(i % size)));
                    }
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("LRU put evict", size), &size, |b, &size| {
            let mut next = size;
            b.iter(|| {
                for _ in 0..100 {
                    lru.put(black_box(next), next);
                    next += 1;
                }
            });
        });

        group.bench_with_input(
            BenchmarkId::new("Indexed put evict", size),
            &size,
            |b, &size| {
                let mut next = size;
                b.iter(|| {
                    for _ in 0..100 {
                        indexed.put(black_box(next), next);
                        next += 1;
                    }
                });
            },
        );
    }

    group.bench_function("Indexed take and put back", |b| {
        let mut cache: IndexedLruCache<usize, Vec<u8>> = IndexedLruCache::init(config(64), None);
        for i in 0..64 {
            cache.put(i, vec![0u8; 4096]);
        }
        b.iter(|| {
            for i in 0..64 {
                if let Some(buffer) = cache.take(&i) {
                    cache.put(i, black_box(buffer));
                }
            }
        });
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
