use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use search_trees::generator::KeyGenerator;
use search_trees::properties::TreeProperties;
use search_trees::{avl, balanced, btree, random, BinaryTree, MultiwayTree};

enum TreeEnum {
    Binary(BinaryTree),
    Multiway(MultiwayTree),
}

impl TreeEnum {
    fn contains(&self, key: i32) -> bool {
        match self {
            Self::Binary(t) => t.contains(key),
            Self::Multiway(t) => t.contains(key),
        }
    }

    fn height(&self) -> usize {
        match self {
            Self::Binary(t) => t.height(),
            Self::Multiway(t) => t.height(),
        }
    }
}

/// Builds every kind of tree from `keys`. `keys` is in insertion order; the perfectly-balanced
/// tree gets a sorted copy.
fn build_all(keys: &[i32]) -> [(&'static str, TreeEnum); 5] {
    let mut sorted = keys.to_vec();
    sorted.sort_unstable();

    [
        (
            "balanced",
            TreeEnum::Binary(balanced::build_perfectly_balanced_tree(&sorted)),
        ),
        (
            "random",
            TreeEnum::Binary(random::build_random_search_tree(keys)),
        ),
        ("avl", TreeEnum::Binary(avl::build_avl_tree(keys))),
        (
            "btree-2",
            TreeEnum::Multiway(btree::build_db_tree(keys, 2).expect("valid degree")),
        ),
        (
            "btree-8",
            TreeEnum::Multiway(btree::build_db_tree(keys, 8).expect("valid degree")),
        ),
    ]
}

/// Helper to bench a lookup on every kind of tree.
/// It creates a group for the given name and closure and runs it for various sizes and
/// kinds of trees before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&TreeEnum, &[i32])) {
    let mut group = c.benchmark_group(name);

    for size in [100, 1_000, 10_000] {
        let keys = KeyGenerator::with_seed(size as u64).unique_keys(size, 1, 10 * size as i32);

        for (name, tree) in build_all(&keys) {
            let id = BenchmarkId::new(name, size);
            group.bench_function(id, |b| b.iter(|| f(black_box(&tree), black_box(&keys))));
        }
    }

    group.finish();
}

/// Benches building each kind of tree from the same random keys.
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [100, 1_000, 10_000] {
        let keys = KeyGenerator::with_seed(size as u64).unique_keys(size, 1, 10 * size as i32);
        let mut sorted = keys.clone();
        sorted.sort_unstable();

        group.bench_function(BenchmarkId::new("balanced", size), |b| {
            b.iter(|| balanced::build_perfectly_balanced_tree(black_box(&sorted)))
        });
        group.bench_function(BenchmarkId::new("random", size), |b| {
            b.iter(|| random::build_random_search_tree(black_box(&keys)))
        });
        group.bench_function(BenchmarkId::new("avl", size), |b| {
            b.iter(|| avl::build_avl_tree(black_box(&keys)))
        });
        for min_degree in [2, 8] {
            group.bench_function(BenchmarkId::new(format!("btree-{min_degree}"), size), |b| {
                b.iter(|| btree::build_db_tree(black_box(&keys), min_degree))
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_build(c);

    bench_helper(c, "find", |tree, keys| {
        for &key in keys {
            black_box(tree.contains(key));
        }
    });
    bench_helper(c, "find-miss", |tree, keys| {
        for &key in keys {
            black_box(tree.contains(-key));
        }
    });
    bench_helper(c, "height", |tree, _| {
        black_box(tree.height());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
