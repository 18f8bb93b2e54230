use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use avltree::Tree;

const N: usize = 100_000;

pub fn benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<i32> = (1..=N).map(|_| rng.gen()).collect();

    c.bench_function("tree_insert", |b| {
        b.iter(|| {
            let mut tree = Tree::new();
            for value in &values {
                tree.insert(*value, *value);
            }
            tree
        })
    });

    let tree: Tree<_, _> = values.iter().map(|value| (*value, *value)).collect();

    c.bench_function("tree_update", |b| {
        let mut tree = tree.clone();
        b.iter(|| {
            for value in &values {
                tree.insert(*value, value.wrapping_add(1));
            }
        })
    });

    c.bench_function("tree_get", |b| {
        b.iter(|| {
            for value in &values {
                black_box(tree.get(value));
            }
        })
    });

    c.bench_function("tree_traverse", |b| {
        b.iter(|| {
            tree.traverse(|k, v| {
                black_box((k, v));
            })
        })
    });

    c.bench_function("tree_iter", |b| {
        b.iter(|| {
            for (k, v) in &tree {
                black_box((k, v));
            }
        })
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
