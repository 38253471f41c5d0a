//! Micro-operation benchmarks for both cache variants.
//!
//! Run with: `cargo bench --bench ops`
//!
//! Measures per-operation latency (nanoseconds) for get and insert on the
//! single-value and multi-value fronts under identical conditions.

use std::hint::black_box;
use std::time::{Duration, Instant};

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lrukit::cache::multi::LruMultiCache;
use lrukit::cache::single::LruCache;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CAPACITY: usize = 16_384;
const OPS: u64 = 100_000;

// ============================================================================
// Get Hit Latency (ns/op)
// ============================================================================

fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_hit_ns");
    group.throughput(Throughput::Elements(OPS));

    group.bench_function("single", |b| {
        b.iter_custom(|iters| {
            let cache: LruCache<u64, u64> = LruCache::new(CAPACITY, Duration::ZERO);
            for i in 0..CAPACITY as u64 {
                cache.insert(i, i);
            }
            let start = Instant::now();
            for _ in 0..iters {
                for i in 0..OPS {
                    let key = i % (CAPACITY as u64);
                    black_box(cache.get(&key).ok());
                }
            }
            start.elapsed()
        })
    });

    group.bench_function("multi", |b| {
        b.iter_custom(|iters| {
            let cache: LruMultiCache<u64, u64> = LruMultiCache::new(CAPACITY, Duration::ZERO);
            for i in 0..CAPACITY as u64 {
                cache.insert(i, &[i, i + 1]);
            }
            let start = Instant::now();
            for _ in 0..iters {
                for i in 0..OPS {
                    let key = i % (CAPACITY as u64);
                    black_box(cache.get(&key).ok());
                }
            }
            start.elapsed()
        })
    });

    group.finish();
}

// ============================================================================
// Insert Latency With Eviction (ns/op)
// ============================================================================

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_ns");
    group.throughput(Throughput::Elements(OPS));

    group.bench_function("single", |b| {
        b.iter_custom(|iters| {
            let cache: LruCache<u64, u64> = LruCache::new(CAPACITY, Duration::ZERO);
            let mut rng = StdRng::seed_from_u64(42);
            let start = Instant::now();
            for _ in 0..iters {
                for _ in 0..OPS {
                    let key = rng.random_range(0..(CAPACITY as u64 * 2));
                    cache.insert(key, key);
                }
            }
            start.elapsed()
        })
    });

    group.bench_function("single_with_ttl", |b| {
        b.iter_custom(|iters| {
            let cache: LruCache<u64, u64> = LruCache::new(CAPACITY, Duration::from_secs(60));
            let mut rng = StdRng::seed_from_u64(42);
            let start = Instant::now();
            for _ in 0..iters {
                for _ in 0..OPS {
                    let key = rng.random_range(0..(CAPACITY as u64 * 2));
                    cache.insert_with_ttl(key, key);
                }
            }
            start.elapsed()
        })
    });

    group.bench_function("multi", |b| {
        b.iter_custom(|iters| {
            let cache: LruMultiCache<u64, u64> = LruMultiCache::new(CAPACITY, Duration::ZERO);
            let mut rng = StdRng::seed_from_u64(42);
            let payload = [1u64, 2, 3, 4];
            let start = Instant::now();
            for _ in 0..iters {
                for _ in 0..OPS {
                    let key = rng.random_range(0..(CAPACITY as u64 * 2));
                    cache.insert(key, &payload);
                }
            }
            start.elapsed()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_get_hit, bench_insert);
criterion_main!(benches);
