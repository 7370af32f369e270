//! Interleaved complex kernels: scalar vs SIMD vs parallel SIMD.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lattice_simd::simd::SimdComplexSlice;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const VECTOR_SIZES: &[usize] = &[1_024, 16_384, 262_144, 1_048_576, 4_194_304];

fn generate_test_data(len: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(-1.0..1.0)).collect()
}

fn benchmark_mult_complex(c: &mut Criterion) {
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group(format!("Complex multiply {}", format_size(size)));
        group.throughput(Throughput::Bytes(
            (2 * size * std::mem::size_of::<f32>()) as u64,
        ));

        let a = generate_test_data(size, 42);
        let b = generate_test_data(size, 43);
        let inputs = (a.as_slice(), b.as_slice());

        group.bench_with_input(BenchmarkId::new("Scalar", size), &inputs, |bench, &(a, b)| {
            bench.iter(|| black_box(a.scalar_mult_complex(b)))
        });
        group.bench_with_input(BenchmarkId::new("SIMD", size), &inputs, |bench, &(a, b)| {
            bench.iter(|| black_box(a.mult_complex(b)))
        });
        group.bench_with_input(
            BenchmarkId::new("Parallel SIMD", size),
            &inputs,
            |bench, &(a, b)| bench.iter(|| black_box(black_box(a).par_mult_complex(b))),
        );

        group.finish();
    }
}

fn benchmark_inner_product(c: &mut Criterion) {
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group(format!("Inner product {}", format_size(size)));
        group.throughput(Throughput::Bytes(
            (2 * size * std::mem::size_of::<f32>()) as u64,
        ));

        let a = generate_test_data(size, 7);
        let b = generate_test_data(size, 8);
        let inputs = (a.as_slice(), b.as_slice());

        group.bench_with_input(BenchmarkId::new("Scalar", size), &inputs, |bench, &(a, b)| {
            bench.iter(|| black_box(a.scalar_inner_product(b)))
        });
        group.bench_with_input(BenchmarkId::new("SIMD", size), &inputs, |bench, &(a, b)| {
            bench.iter(|| black_box(a.inner_product(b)))
        });
        group.bench_with_input(
            BenchmarkId::new("Parallel SIMD", size),
            &inputs,
            |bench, &(a, b)| bench.iter(|| black_box(black_box(a).par_inner_product(b))),
        );

        group.finish();
    }
}

fn format_size(elements: usize) -> String {
    let bytes = elements * std::mem::size_of::<f32>();
    if bytes >= 1_048_576 {
        format!("{:.1} MiB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}

criterion_group!(benches, benchmark_mult_complex, benchmark_inner_product);
criterion_main!(benches);
