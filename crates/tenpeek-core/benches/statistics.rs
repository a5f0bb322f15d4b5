//! Benchmarks for the reductions and plain rendering.
//!
//! Run with:
//! ```bash
//! cargo bench --bench statistics
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tenpeek_core::{reductions, DenseND, PrintOptions};

fn sample(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| if i % 97 == 0 { f64::NAN } else { (i as f64).sin() })
        .collect()
}

/// Benchmark the NaN-aware and finite-only reductions
fn bench_reductions(c: &mut Criterion) {
    let mut group = c.benchmark_group("reductions");

    for len in [1_000usize, 100_000, 1_000_000] {
        let values = sample(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("nan_std", len), &values, |b, values| {
            b.iter(|| black_box(reductions::nan_std(black_box(values))));
        });

        group.bench_with_input(
            BenchmarkId::new("finite_std_mean", len),
            &values,
            |b, values| {
                b.iter(|| black_box(reductions::finite_std_mean(black_box(values))));
            },
        );
    }

    group.finish();
}

/// Benchmark plain rendering with and without elision
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let array = DenseND::from_vec(sample(64 * 64), &[64, 64]).unwrap();

    for threshold in [16usize, 1 << 20] {
        let options = PrintOptions {
            threshold,
            ..PrintOptions::default()
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(threshold),
            &options,
            |b, options| {
                b.iter(|| black_box(array.render(black_box(options))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_reductions, bench_render);
criterion_main!(benches);
