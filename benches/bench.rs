use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bstree::tree::Tree;

/// The keys `0..num_nodes` reordered so that inserting them front to back
/// builds a balanced tree. The tree never rebalances, so inserting them in
/// sorted order would instead produce a list-shaped tree and quadratic
/// build times.
fn balanced_insertion_order(num_nodes: usize) -> Vec<i32> {
    let mut order = Vec::with_capacity(num_nodes);
    let mut ranges = std::collections::VecDeque::new();
    ranges.push_back((0i32, num_nodes as i32 - 1));

    while let Some((lo, hi)) = ranges.pop_front() {
        if lo > hi {
            continue;
        }
        let mid = lo + (hi - lo) / 2;
        order.push(mid);
        ranges.push_back((lo, mid - 1));
        ranges.push_back((mid + 1, hi));
    }

    order
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for
/// various sizes of tree before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32, i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let num_nodes = 2usize.pow(num_levels as u32) - 1;
        let largest_element_in_tree = num_nodes as i32 - 1;

        let tree = {
            let mut tree = Tree::new();
            for x in balanced_insertion_order(num_nodes) {
                tree.insert(x, x);
            }

            tree
        };

        let id = BenchmarkId::new(name, largest_element_in_tree);
        group.bench_function(id, |b| {
            b.iter_custom(|iters| {
                let mut time = std::time::Duration::ZERO;
                for _ in 0..iters {
                    let mut tree = black_box(tree.clone());
                    let instant = std::time::Instant::now();
                    f(&mut tree, black_box(largest_element_in_tree));
                    let elapsed = instant.elapsed();
                    time += elapsed;
                }
                time
            })
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "get", |tree, i| {
        let _value = black_box(tree.get(&i));
    });
    bench_helper(c, "get-miss", |tree, i| {
        let _value = black_box(tree.get(&(i + 1)));
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1, i + 1);
    });

    bench_helper(c, "remove", |tree, i| {
        let _value = tree.remove(&i);
    });

    bench_helper(c, "pop-min", |tree, _| {
        let _pair = tree.pop_min();
    });

    bench_helper(c, "in-order", |tree, _| {
        let _pairs = black_box(tree.in_order());
    });
    bench_helper(c, "level-order", |tree, _| {
        let _pairs = black_box(tree.level_order());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
