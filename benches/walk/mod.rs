use std::hint::black_box;

use avltree::AvlTree;
use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use crate::Lfsr;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("walk");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the tree.
    let mut rand = Lfsr::default();
    let mut t = AvlTree::default();

    for _i in 0..n_values {
        t.insert(rand.next());
    }

    bench_successor(n_values, g, &t);
    bench_predecessor(n_values, g, &t);
}

/// Generate a benchmark that visits every node by following `$step` links
/// from the `$start` node of the tree.
macro_rules! walk_bench {
    (
        $step:ident,
        $start:ident
    ) => {
        paste::paste! {
            fn [<bench_ $step>]<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &AvlTree<u16>)
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: stringify!($step),
                };

                g.throughput(Throughput::Elements(n_values as _));
                // Nodes visited per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| {
                        let mut cursor = t.$start();
                        while let Some(n) = cursor {
                            black_box(n);
                            cursor = t.$step(n).expect("live handle");
                        }
                    })
                });
            }
        }
    }
}

walk_bench!(successor, first);
walk_bench!(predecessor, last);
