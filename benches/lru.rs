use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tiercache::LruCache;
use tiercache::policy::lru::LruCore;
use tiercache::traits::EvictionPolicy;

fn filled(capacity: usize) -> LruCore<u64, u64> {
    let mut cache = LruCore::new(capacity);
    for i in 0..capacity as u64 {
        cache.put(i, i);
    }
    cache
}

fn bench_lru_put_get(c: &mut Criterion) {
    c.bench_function("lru_put_get", |b| {
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

fn bench_lru_hit_hotset(c: &mut Criterion) {
    c.bench_function("lru_hit_hotset", |b| {
        b.iter_batched(
            || filled(4096),
            |mut cache| {
                for i in 0..4096u64 {
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_eviction_churn(c: &mut Criterion) {
    c.bench_function("lru_eviction_churn", |b| {
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

fn bench_lru_random_mix(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let keys: Vec<u64> = (0..8192).map(|_| rng.gen_range(0..4096)).collect();

    c.bench_function("lru_random_mix", |b| {
        b.iter_batched(
            || filled(1024),
            |mut cache| {
                for (n, key) in keys.iter().enumerate() {
                    if n % 4 == 0 {
                        cache.put(*key, n as u64);
                    } else {
                        let _ = std::hint::black_box(cache.get(key));
                    }
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_resize_shrink(c: &mut Criterion) {
    c.bench_function("lru_resize_shrink", |b| {
        b.iter_batched(
            || filled(4096),
            |mut cache| {
                let _ = std::hint::black_box(cache.resize(std::hint::black_box(16usize)));
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_concurrent_get(c: &mut Criterion) {
    let cache: LruCache<u64, u64> = LruCache::new(1024);
    for i in 0..1024u64 {
        cache.put(i, i);
    }

    c.bench_function("lru_concurrent_wrapper_get", |b| {
        b.iter(|| {
            for i in 0..1024u64 {
                let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_lru_put_get,
    bench_lru_hit_hotset,
    bench_lru_eviction_churn,
    bench_lru_random_mix,
    bench_lru_resize_shrink,
    bench_lru_concurrent_get
);
criterion_main!(benches);
