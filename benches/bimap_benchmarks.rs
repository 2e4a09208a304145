use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeMap;

use bitreap::Bimap;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_pairs(n: usize) -> Vec<(i64, i64)> {
    (0..n as i64).map(|i| (i, i + 1_000_000)).collect()
}

fn random_pairs(n: usize) -> Vec<(i64, i64)> {
    // Use a simple LCG for a deterministic pseudo-random sequence.
    let mut pairs = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        let left = (x >> 33) as i64;
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        let right = (x >> 33) as i64;
        pairs.push((left, right));
    }
    pairs
}

/// The comparison baseline: the naive bidirectional map, two BTreeMaps with
/// every key stored twice.
#[derive(Default)]
struct DualBTreeMap {
    left_to_right: BTreeMap<i64, i64>,
    right_to_left: BTreeMap<i64, i64>,
}

impl DualBTreeMap {
    fn insert(&mut self, left: i64, right: i64) -> bool {
        if self.left_to_right.contains_key(&left) || self.right_to_left.contains_key(&right) {
            return false;
        }
        self.left_to_right.insert(left, right);
        self.right_to_left.insert(right, left);
        true
    }

    fn get_by_left(&self, left: &i64) -> Option<&i64> {
        self.left_to_right.get(left)
    }

    fn remove_by_left(&mut self, left: &i64) -> Option<(i64, i64)> {
        let right = self.left_to_right.remove(left)?;
        self.right_to_left.remove(&right);
        Some((*left, right))
    }
}

// ─── Insertion ──────────────────────────────────────────────────────────────

fn bench_insert_ordered(c: &mut Criterion) {
    let pairs = ordered_pairs(N);
    let mut group = c.benchmark_group("insert_ordered");

    group.bench_function(BenchmarkId::new("Bimap", N), |b| {
        b.iter(|| {
            let mut map = Bimap::new();
            for &(l, r) in &pairs {
                map.insert(l, r);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("DualBTreeMap", N), |b| {
        b.iter(|| {
            let mut map = DualBTreeMap::default();
            for &(l, r) in &pairs {
                map.insert(l, r);
            }
            map
        });
    });

    group.finish();
}

fn bench_insert_random(c: &mut Criterion) {
    let pairs = random_pairs(N);
    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("Bimap", N), |b| {
        b.iter(|| {
            let mut map = Bimap::new();
            for &(l, r) in &pairs {
                map.insert(l, r);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("DualBTreeMap", N), |b| {
        b.iter(|| {
            let mut map = DualBTreeMap::default();
            for &(l, r) in &pairs {
                map.insert(l, r);
            }
            map
        });
    });

    group.finish();
}

// ─── Lookup ─────────────────────────────────────────────────────────────────

fn bench_lookup(c: &mut Criterion) {
    let pairs = random_pairs(N);
    let mut group = c.benchmark_group("lookup");

    let mut bimap = Bimap::new();
    let mut dual = DualBTreeMap::default();
    for &(l, r) in &pairs {
        bimap.insert(l, r);
        dual.insert(l, r);
    }

    group.bench_function(BenchmarkId::new("Bimap", N), |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for (l, _) in &pairs {
                if bimap.get_by_left(l).is_some() {
                    hits += 1;
                }
            }
            hits
        });
    });

    group.bench_function(BenchmarkId::new("DualBTreeMap", N), |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for (l, _) in &pairs {
                if dual.get_by_left(l).is_some() {
                    hits += 1;
                }
            }
            hits
        });
    });

    group.finish();
}

// ─── Removal ────────────────────────────────────────────────────────────────

fn bench_remove(c: &mut Criterion) {
    let pairs = random_pairs(N);
    let mut group = c.benchmark_group("remove");

    group.bench_function(BenchmarkId::new("Bimap", N), |b| {
        b.iter_batched(
            || {
                let mut map = Bimap::new();
                for &(l, r) in &pairs {
                    map.insert(l, r);
                }
                map
            },
            |mut map| {
                for (l, _) in &pairs {
                    map.remove_by_left(l);
                }
                map
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function(BenchmarkId::new("DualBTreeMap", N), |b| {
        b.iter_batched(
            || {
                let mut map = DualBTreeMap::default();
                for &(l, r) in &pairs {
                    map.insert(l, r);
                }
                map
            },
            |mut map| {
                for (l, _) in &pairs {
                    map.remove_by_left(l);
                }
                map
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

// ─── Iteration ──────────────────────────────────────────────────────────────

fn bench_iterate(c: &mut Criterion) {
    let pairs = random_pairs(N);
    let mut group = c.benchmark_group("iterate");

    let mut bimap = Bimap::new();
    let mut dual = DualBTreeMap::default();
    for &(l, r) in &pairs {
        bimap.insert(l, r);
        dual.insert(l, r);
    }

    group.bench_function(BenchmarkId::new("Bimap", N), |b| {
        b.iter(|| bimap.iter_left().map(|(&l, &r)| l ^ r).fold(0, i64::wrapping_add));
    });

    group.bench_function(BenchmarkId::new("DualBTreeMap", N), |b| {
        b.iter(|| dual.left_to_right.iter().map(|(&l, &r)| l ^ r).fold(0, i64::wrapping_add));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_ordered,
    bench_insert_random,
    bench_lookup,
    bench_remove,
    bench_iterate
);
criterion_main!(benches);
