//! Statistical and range checks for sparse generation

use sparsebench::generator::VALUE_RANGE;
use sparsebench::{fill_sparse_seeded, generate_sparse, DenseMatrix, WorkerCount};

#[test]
fn test_values_in_range() {
    for workers in [1, 3, 8] {
        let m = generate_sparse(200, WorkerCount::new(workers).unwrap());
        for &value in m.as_array().iter() {
            assert!(value == 0 || VALUE_RANGE.contains(&value), "value {} out of range", value);
        }
    }
}

#[test]
fn test_expected_nonzero_count() {
    // Each generation is a sum of n² Bernoulli(1/n) trials: mean n,
    // variance just under n. Averaged over many runs the mean is tight.
    let n = 400;
    let runs = 50;
    let workers = WorkerCount::new(4).unwrap();

    let total: usize = (0..runs)
        .map(|seed| {
            let mut m = DenseMatrix::zeros(n);
            fill_sparse_seeded(&mut m, workers, seed);
            m.nnz()
        })
        .sum();

    let mean = total as f64 / runs as f64;
    // Standard error is sqrt(n / runs) ≈ 2.8, allow well over five of them
    assert!(
        (mean - n as f64).abs() < 20.0,
        "mean non-zero count {} too far from {}",
        mean,
        n
    );
}

#[test]
fn test_nonzeros_spread_over_all_worker_blocks() {
    let n = 300;
    let workers = WorkerCount::new(3).unwrap();
    let mut m = DenseMatrix::zeros(n);
    fill_sparse_seeded(&mut m, workers, 11);

    // Each block of 100 rows expects ~100 non-zeros
    for block in 0..3 {
        let rows = block * 100..(block + 1) * 100;
        let count = m.row_block(rows).iter().filter(|&&v| v != 0).count();
        assert!((40..=160).contains(&count), "block {} has {} non-zeros", block, count);
    }
}

#[test]
fn test_different_seeds_differ() {
    let workers = WorkerCount::new(2).unwrap();
    let mut a = DenseMatrix::zeros(100);
    let mut b = DenseMatrix::zeros(100);
    fill_sparse_seeded(&mut a, workers, 1);
    fill_sparse_seeded(&mut b, workers, 2);
    assert_ne!(a, b);
}
