//! Microbenchmarks for the in-memory B+tree collections.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bplus::{BPTreeList, BPTreeMap};

const INSERT_COUNT: u64 = 16_384;

fn btree(c: &mut Criterion) {
    let mut group = c.benchmark_group("btree");
    group.sample_size(30);

    group.throughput(Throughput::Elements(INSERT_COUNT));
    group.bench_function("map_sequential_insert", |b| {
        b.iter_batched(
            BPTreeMap::<u64, u64>::new,
            |mut map| {
                for key in 0..INSERT_COUNT {
                    map.insert(key, key);
                }
                black_box(map.len());
            },
            BatchSize::SmallInput,
        );
    });

    let mut random_keys: Vec<u64> = (0..INSERT_COUNT).collect();
    random_keys.shuffle(&mut ChaCha8Rng::seed_from_u64(0xBEEF_F00D));

    group.throughput(Throughput::Elements(INSERT_COUNT));
    group.bench_function("map_random_insert", |b| {
        b.iter_batched(
            BPTreeMap::<u64, u64>::new,
            |mut map| {
                for &key in &random_keys {
                    map.insert(key, key);
                }
                black_box(map.len());
            },
            BatchSize::SmallInput,
        );
    });

    group.throughput(Throughput::Elements(INSERT_COUNT));
    group.bench_function("map_lookup", |b| {
        let map: BPTreeMap<u64, u64> = (0..INSERT_COUNT).map(|key| (key, key)).collect();
        b.iter(|| {
            for key in &random_keys {
                black_box(map.get(key));
            }
        });
    });

    group.throughput(Throughput::Elements(INSERT_COUNT));
    group.bench_function("list_push", |b| {
        b.iter_batched(
            BPTreeList::<u64>::new,
            |mut list| {
                for n in 0..INSERT_COUNT {
                    list.push(n);
                }
                black_box(list.len());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, btree);
criterion_main!(benches);
