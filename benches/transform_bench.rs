#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use hadamard_inverse::{
    forward_transform,
    golden::{P, R},
    inverse_transform,
};

fn inverse_benchmark(c: &mut Criterion) {
    c.bench_function("inverse 4x4", |b| {
        b.iter(|| inverse_transform(black_box(&R), black_box(&P)))
    });
}

fn forward_benchmark(c: &mut Criterion) {
    let coeffs = inverse_transform(&R, &P);
    c.bench_function("forward 4x4", |b| {
        b.iter(|| forward_transform(black_box(&coeffs), black_box(&P)))
    });
}

fn inverse_many_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse 4x4 x1024");
    group.sample_size(50);
    group.bench_function("sequential", |b| {
        b.iter_batched(
            || vec![(R, P); 1024],
            |pairs| {
                pairs
                    .iter()
                    .map(|(r, p)| inverse_transform(r, p))
                    .collect::<Vec<_>>()
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    transform_bench,
    inverse_benchmark,
    forward_benchmark,
    inverse_many_benchmark,
);
criterion_main!(transform_bench);
