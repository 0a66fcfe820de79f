use avltree::AvlTree;
use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    bench: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

/// Measure the time needed to insert `n_values` number of keys into an empty
/// tree, both randomly generated and in ascending order (which rotates on
/// every other insert).
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    g.throughput(Throughput::Elements(n_values as _)); // Keys inserted per second

    let bench_name = BenchName {
        bench: "random",
        n_values,
    };
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || (AvlTree::default(), Lfsr::default()),
            |(mut t, mut rand)| {
                for _i in 0..n_values {
                    t.insert(rand.next());
                }
                t
            },
            criterion::BatchSize::PerIteration,
        );
    });

    let bench_name = BenchName {
        bench: "ascending",
        n_values,
    };
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            AvlTree::default,
            |mut t| {
                for v in 0..n_values {
                    t.insert(v);
                }
                t
            },
            criterion::BatchSize::PerIteration,
        );
    });
}
