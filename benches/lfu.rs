use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tiercache::LfuCache;
use tiercache::policy::lfu::LfuCore;
use tiercache::traits::EvictionPolicy;

fn filled(capacity: usize) -> LfuCore<u64, u64> {
    let mut cache = LfuCore::new(capacity);
    for i in 0..capacity as u64 {
        cache.put(i, i);
    }
    cache
}

fn bench_lfu_put_get(c: &mut Criterion) {
    c.bench_function("lfu_put_get", |b| {
        b.iter_batched(
            || filled(1024),
            |mut cache| {
                for i in 0..1024u64 {
                    cache.put(std::hint::black_box(i + 10_000), i);
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

// Repeated hits on one key walk it up through many tiers.
fn bench_lfu_promote_single_key(c: &mut Criterion) {
    c.bench_function("lfu_promote_single_key", |b| {
        b.iter_batched(
            || filled(1024),
            |mut cache| {
                for _ in 0..4096 {
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(7)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lfu_eviction_churn(c: &mut Criterion) {
    c.bench_function("lfu_eviction_churn", |b| {
        b.iter_batched(
            || filled(1024),
            |mut cache| {
                for i in 0..4096u64 {
                    cache.put(std::hint::black_box(10_000 + i), i);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lfu_skewed_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("lfu_skewed_mix");
    for hot_prob in [0.5f64, 0.9] {
        let mut rng = StdRng::seed_from_u64(7);
        let keys: Vec<u64> = (0..8192)
            .map(|_| {
                if rng.gen_bool(hot_prob) {
                    rng.gen_range(0..64)
                } else {
                    rng.gen_range(64..8192)
                }
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(hot_prob), &keys, |b, keys| {
            b.iter_batched(
                || filled(512),
                |mut cache| {
                    for key in keys {
                        if cache.get(key).is_none() {
                            cache.put(*key, *key);
                        }
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_lfu_concurrent_put(c: &mut Criterion) {
    let cache: LfuCache<u64, u64> = LfuCache::new(1024);

    c.bench_function("lfu_concurrent_wrapper_put", |b| {
        b.iter(|| {
            for i in 0..1024u64 {
                cache.put(std::hint::black_box(i % 2048), i);
            }
        })
    });
}

criterion_group!(
    benches,
    bench_lfu_put_get,
    bench_lfu_promote_single_key,
    bench_lfu_eviction_churn,
    bench_lfu_skewed_mix,
    bench_lfu_concurrent_put
);
criterion_main!(benches);
