use chain_hashmap::HashMap;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

// Inserts past the first growth rebuild the index on every call and
// deletes always do, so sizes stay small.
const N: usize = 2_000;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn filled(seed: u64) -> (HashMap<String, u64>, Vec<String>) {
    let mut m = HashMap::new();
    let keys: Vec<_> = lcg(seed).take(N).map(key).collect();
    for (i, k) in keys.iter().enumerate() {
        m.set(k.clone(), i as u64);
    }
    (m, keys)
}

fn bench_set_fresh(c: &mut Criterion) {
    c.bench_function("hash_map::set_fresh_2k", |b| {
        b.iter_batched(
            HashMap::<String, u64>::new,
            |mut m| {
                for (i, x) in lcg(1).take(N).enumerate() {
                    m.set(key(x), i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_set_overwrite(c: &mut Criterion) {
    c.bench_function("hash_map::set_overwrite_2k", |b| {
        b.iter_batched(
            || filled(2),
            |(mut m, keys)| {
                for (i, k) in keys.into_iter().enumerate() {
                    m.set(k, i as u64 + 1);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("hash_map::get_hit", |b| {
        let (m, keys) = filled(7);
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(m.get(k.as_str()).ok());
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("hash_map::get_miss", |b| {
        let (m, _keys) = filled(11);
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // generate keys unlikely in map
            let k = key(miss.next().unwrap());
            black_box(m.contains(k.as_str()));
        })
    });
}

fn bench_delete_all(c: &mut Criterion) {
    c.bench_function("hash_map::delete_all_2k", |b| {
        b.iter_batched(
            || filled(5),
            |(mut m, keys)| {
                for k in &keys {
                    let _ = m.delete(k.as_str());
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_traversals(c: &mut Criterion) {
    c.bench_function("hash_map::iter_sum_2k", |b| {
        let (m, _keys) = filled(999);
        b.iter(|| {
            let mut sum = 0u64;
            for (_k, v) in m.iter() {
                sum = sum.wrapping_add(*v);
            }
            black_box(sum)
        })
    });

    c.bench_function("hash_map::items_snapshot_2k", |b| {
        let (m, _keys) = filled(1001);
        b.iter(|| black_box(m.items().count()))
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(30)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches_mutation;
    config = bench_config();
    targets = bench_set_fresh, bench_set_overwrite, bench_delete_all
}
criterion_group! {
    name = benches_read;
    config = bench_config();
    targets = bench_get_hit, bench_get_miss, bench_traversals
}
criterion_main!(benches_mutation, benches_read);
