use core::hint::black_box;

use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use struct_hash::HashTable;
use struct_hash::Value;

const N: u64 = 10_000;

fn composite_key(i: u64) -> Value {
    Value::record([
        ("id", Value::bigint(i.into())),
        ("name", Value::from(format!("key_{i:016X}"))),
    ])
}

fn bench_integer_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer_keys");
    group.throughput(Throughput::Elements(N));

    group.bench_function("struct_hash/insert", |b| {
        b.iter(|| {
            let mut table = HashTable::new();
            for i in 0..N {
                table.insert(black_box(i), i);
            }
            table
        })
    });

    group.bench_function("hashbrown/insert", |b| {
        b.iter(|| {
            let mut map = hashbrown::HashMap::new();
            for i in 0..N {
                map.insert(black_box(i), i);
            }
            map
        })
    });

    let mut table = HashTable::new();
    let mut map = hashbrown::HashMap::new();
    for i in 0..N {
        table.insert(i, i);
        map.insert(i, i);
    }

    group.bench_function("struct_hash/get", |b| {
        b.iter(|| {
            let mut found = 0u64;
            for i in 0..N {
                if table.get(black_box(&i)).is_some() {
                    found += 1;
                }
            }
            found
        })
    });

    group.bench_function("hashbrown/get", |b| {
        b.iter(|| {
            let mut found = 0u64;
            for i in 0..N {
                if map.get(black_box(&i)).is_some() {
                    found += 1;
                }
            }
            found
        })
    });

    group.bench_function("struct_hash/insert_remove_churn", |b| {
        b.iter(|| {
            let mut table = HashTable::new();
            for i in 0..N {
                table.insert(black_box(i), i);
            }
            for i in 0..N {
                table.remove(black_box(&i));
            }
            table
        })
    });

    group.finish();
}

fn bench_composite_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite_keys");
    group.throughput(Throughput::Elements(N / 10));

    group.bench_function("struct_hash/insert", |b| {
        b.iter(|| {
            let mut table = HashTable::new();
            for i in 0..N / 10 {
                table.insert(composite_key(black_box(i)), i);
            }
            table
        })
    });

    let mut table = HashTable::new();
    let keys: Vec<Value> = (0..N / 10).map(composite_key).collect();
    for (i, key) in keys.iter().enumerate() {
        table.insert(key.clone(), i);
    }

    group.bench_function("struct_hash/get", |b| {
        b.iter(|| {
            let mut found = 0u64;
            for key in &keys {
                if table.get(black_box(key)).is_some() {
                    found += 1;
                }
            }
            found
        })
    });

    group.finish();
}

criterion_group!(benches, bench_integer_keys, bench_composite_keys);
criterion_main!(benches);
