//! Criterion benchmarks for the three sorters.
//!
//! Complements the trial-averaging CLI with criterion's statistics. Bubble
//! sort is capped at smaller sizes since it is quadratic on every input.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sortbench_core::bench::random_input;
use sortbench_core::{Algorithm, Sorter};

fn bench_algorithm(c: &mut Criterion, algorithm: Algorithm, sizes: &[usize]) {
    let mut group = c.benchmark_group(algorithm.label());
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for &size in sizes {
        let input = random_input(&mut rng, size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| algorithm.sort(black_box(input.as_slice())));
        });
    }

    group.finish();
}

fn bench_quicksort(c: &mut Criterion) {
    bench_algorithm(c, Algorithm::Quicksort, &[10, 100, 1000, 10000]);
}

fn bench_bubblesort(c: &mut Criterion) {
    bench_algorithm(c, Algorithm::Bubblesort, &[10, 100, 1000]);
}

fn bench_mergesort(c: &mut Criterion) {
    bench_algorithm(c, Algorithm::Mergesort, &[10, 100, 1000, 10000]);
}

criterion_group!(benches, bench_quicksort, bench_bubblesort, bench_mergesort);
criterion_main!(benches);
