//! Validation throughput on balanced trees of increasing size.

use btreecheck::{Node, Tree, Validator};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Balanced tree of fan-out `order` over `keys` (already sorted).
fn build(keys: &[i64], order: usize) -> Node {
    if keys.len() < order {
        return Node::with_empty_children(keys.to_vec());
    }

    let step = keys.len() / order;
    let mut separators = Vec::with_capacity(order - 1);
    let mut children = Vec::with_capacity(order);
    let mut start = 0;
    for n in 1..order {
        let at = n * step;
        children.push(child(&keys[start..at], order));
        separators.push(keys[at]);
        start = at + 1;
    }
    children.push(child(&keys[start..], order));
    Node::new(separators, children)
}

fn child(keys: &[i64], order: usize) -> Option<Node> {
    if keys.is_empty() {
        None
    } else {
        Some(build(keys, order))
    }
}

fn bench_is_valid(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_valid");
    for size in [1_000i64, 10_000, 100_000] {
        let keys: Vec<i64> = (0..size).collect();
        let tree = Tree::with_root(build(&keys, 16));
        let validator = Validator::new();

        group.bench_with_input(BenchmarkId::from_parameter(size), &tree, |b, tree| {
            b.iter(|| validator.is_valid(black_box(tree)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_is_valid);
criterion_main!(benches);
