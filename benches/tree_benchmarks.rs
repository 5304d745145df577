use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rubra::{Map, Set};
use std::collections::{BTreeMap, BTreeSet};

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn reverse_ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

// ─── Map Benchmarks ─────────────────────────────────────────────────────────

fn bench_map_insert(c: &mut Criterion) {
    for (pattern, keys) in [
        ("ordered", ordered_keys(N)),
        ("reverse", reverse_ordered_keys(N)),
        ("random", random_keys(N)),
    ] {
        let mut group = c.benchmark_group(format!("map_insert_{pattern}"));

        group.bench_function(BenchmarkId::new("Map", N), |b| {
            b.iter(|| {
                let mut map = Map::new();
                for &k in &keys {
                    map.insert(k, k);
                }
                map
            });
        });

        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for &k in &keys {
                    map.insert(k, k);
                }
                map
            });
        });

        group.finish();
    }
}

fn bench_map_get(c: &mut Criterion) {
    for (pattern, keys) in [
        ("ordered", ordered_keys(N)),
        ("reverse", reverse_ordered_keys(N)),
        ("random", random_keys(N)),
    ] {
        let map: Map<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
        let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

        let mut group = c.benchmark_group(format!("map_get_{pattern}"));

        group.bench_function(BenchmarkId::new("Map", N), |b| {
            b.iter(|| {
                let mut sum = 0i64;
                for &k in &keys {
                    if let Some(&v) = map.get(&k) {
                        sum = sum.wrapping_add(v);
                    }
                }
                sum
            });
        });

        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter(|| {
                let mut sum = 0i64;
                for &k in &keys {
                    if let Some(&v) = bt_map.get(&k) {
                        sum = sum.wrapping_add(v);
                    }
                }
                sum
            });
        });

        group.finish();
    }
}

fn bench_map_remove(c: &mut Criterion) {
    for (pattern, keys) in [
        ("ordered", ordered_keys(N)),
        ("reverse", reverse_ordered_keys(N)),
        ("random", random_keys(N)),
    ] {
        let mut group = c.benchmark_group(format!("map_remove_{pattern}"));

        group.bench_function(BenchmarkId::new("Map", N), |b| {
            b.iter_batched(
                || keys.iter().map(|&k| (k, k)).collect::<Map<i64, i64>>(),
                |mut map| {
                    for &k in &keys {
                        map.remove(&k);
                    }
                    map
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter_batched(
                || keys.iter().map(|&k| (k, k)).collect::<BTreeMap<i64, i64>>(),
                |mut map| {
                    for &k in &keys {
                        map.remove(&k);
                    }
                    map
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.finish();
    }
}

// ─── Set Benchmarks ─────────────────────────────────────────────────────────

fn bench_set_insert(c: &mut Criterion) {
    for (pattern, keys) in [
        ("ordered", ordered_keys(N)),
        ("reverse", reverse_ordered_keys(N)),
        ("random", random_keys(N)),
    ] {
        let mut group = c.benchmark_group(format!("set_insert_{pattern}"));

        group.bench_function(BenchmarkId::new("Set", N), |b| {
            b.iter(|| {
                let mut set = Set::new();
                for &k in &keys {
                    set.insert(k);
                }
                set
            });
        });

        group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for &k in &keys {
                    set.insert(k);
                }
                set
            });
        });

        group.finish();
    }
}

fn bench_set_contains(c: &mut Criterion) {
    for (pattern, keys) in [
        ("ordered", ordered_keys(N)),
        ("reverse", reverse_ordered_keys(N)),
        ("random", random_keys(N)),
    ] {
        let set: Set<i64> = keys.iter().copied().collect();
        let bt_set: BTreeSet<i64> = keys.iter().copied().collect();

        let mut group = c.benchmark_group(format!("set_contains_{pattern}"));

        group.bench_function(BenchmarkId::new("Set", N), |b| {
            b.iter(|| {
                let mut count = 0usize;
                for &k in &keys {
                    if set.contains(&k) {
                        count += 1;
                    }
                }
                count
            });
        });

        group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
            b.iter(|| {
                let mut count = 0usize;
                for &k in &keys {
                    if bt_set.contains(&k) {
                        count += 1;
                    }
                }
                count
            });
        });

        group.finish();
    }
}

fn bench_set_remove(c: &mut Criterion) {
    for (pattern, keys) in [
        ("ordered", ordered_keys(N)),
        ("reverse", reverse_ordered_keys(N)),
        ("random", random_keys(N)),
    ] {
        let mut group = c.benchmark_group(format!("set_remove_{pattern}"));

        group.bench_function(BenchmarkId::new("Set", N), |b| {
            b.iter_batched(
                || keys.iter().copied().collect::<Set<i64>>(),
                |mut set| {
                    for &k in &keys {
                        set.remove(&k);
                    }
                    set
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
            b.iter_batched(
                || keys.iter().copied().collect::<BTreeSet<i64>>(),
                |mut set| {
                    for &k in &keys {
                        set.remove(&k);
                    }
                    set
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.finish();
    }
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(map_benches, bench_map_insert, bench_map_get, bench_map_remove);
criterion_group!(set_benches, bench_set_insert, bench_set_contains, bench_set_remove);

criterion_main!(map_benches, set_benches);
