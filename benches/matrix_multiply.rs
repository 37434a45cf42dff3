//! Benchmarks for dense and COO matrix multiplication

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sparsebench::{
    classical_multiply, classical_multiply_parallel, fill_sparse_seeded, multiply_coo,
    multiply_coo_parallel, DenseMatrix, WorkerCount,
};

/// Create a generated sparse operand with a fixed seed
fn create_test_matrix(n: usize, workers: WorkerCount, seed: u64) -> DenseMatrix {
    let mut m = DenseMatrix::zeros(n);
    fill_sparse_seeded(&mut m, workers, seed);
    m
}

fn bench_matrix_multiply(c: &mut Criterion) {
    let workers = WorkerCount::detect();
    let mut group = c.benchmark_group("multiply");

    for n in [64, 256, 512] {
        let m1 = create_test_matrix(n, workers, 42);
        let m2 = create_test_matrix(n, workers, 43);
        let a = m1.to_coo(workers);
        let b = m2.to_coo(workers);

        group.bench_with_input(BenchmarkId::new("classical", n), &n, |bench, _| {
            bench.iter(|| classical_multiply(black_box(&m1), black_box(&m2)))
        });
        group.bench_with_input(BenchmarkId::new("classical_parallel", n), &n, |bench, _| {
            bench.iter(|| classical_multiply_parallel(black_box(&m1), black_box(&m2)))
        });
        group.bench_with_input(BenchmarkId::new("coo", n), &n, |bench, _| {
            bench.iter(|| multiply_coo(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("coo_parallel", n), &n, |bench, _| {
            bench.iter(|| multiply_coo_parallel(black_box(&a), black_box(&b), workers))
        });
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let workers = WorkerCount::detect();
    let n = 1024;
    let m = create_test_matrix(n, workers, 7);

    c.bench_function("generate_1024", |bench| {
        bench.iter(|| create_test_matrix(black_box(n), workers, 7))
    });
    c.bench_function("to_coo_1024", |bench| bench.iter(|| black_box(&m).to_coo(workers)));
}

criterion_group!(benches, bench_matrix_multiply, bench_pipeline);
criterion_main!(benches);
