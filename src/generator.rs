//! Random sparse matrix generation
//!
//! A matrix of dimension n counts as sparse when it holds roughly n
//! non-zeros. Each cell is made non-zero independently with probability
//! `1/n`, which gives n non-zeros on average.
//!
//! Rows are split into contiguous blocks, one per worker. Every worker owns
//! its block exclusively and draws from its own ChaCha stream: all workers
//! share one seed but use distinct stream numbers, so no random state is
//! ever shared across threads.

use std::ops::RangeInclusive;

use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::matrix::{DenseMatrix, WorkerCount};
use crate::utils::{contiguous_ranges, fan_out};
use crate::Value;

/// Range non-zero values are drawn from, uniformly
pub const VALUE_RANGE: RangeInclusive<Value> = 1..=100;

/// Creates an n×n sparse matrix with a fresh seed from the OS
pub fn generate_sparse(n: usize, workers: WorkerCount) -> DenseMatrix {
    let mut matrix = DenseMatrix::zeros(n);
    fill_sparse(&mut matrix, workers);
    matrix
}

/// Populates `matrix` in place with a fresh seed from the OS
pub fn fill_sparse(matrix: &mut DenseMatrix, workers: WorkerCount) {
    fill_sparse_seeded(matrix, workers, OsRng.next_u64());
}

/// Populates `matrix` in place from a fixed seed
///
/// The outcome is reproducible for a given seed and worker count. Cells are
/// only ever set, never cleared, so `matrix` is expected to start at zero.
///
/// # Examples
///
/// ```
/// use sparsebench::{DenseMatrix, WorkerCount};
/// use sparsebench::generator::fill_sparse_seeded;
///
/// let workers = WorkerCount::new(2).unwrap();
/// let mut a = DenseMatrix::zeros(50);
/// let mut b = DenseMatrix::zeros(50);
/// fill_sparse_seeded(&mut a, workers, 7);
/// fill_sparse_seeded(&mut b, workers, 7);
/// assert_eq!(a, b);
/// ```
pub fn fill_sparse_seeded(matrix: &mut DenseMatrix, workers: WorkerCount, seed: u64) {
    let n = matrix.dim();
    if n == 0 {
        return;
    }

    let probability = 1.0 / n as f64;
    let ranges = contiguous_ranges(n, workers.get());
    let blocks = matrix.split_row_blocks(&ranges);

    let filled: usize = fan_out(blocks, |worker, mut block| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(worker as u64);

        let mut count: usize = 0;
        for cell in block.iter_mut() {
            if rng.gen_bool(probability) {
                *cell = rng.gen_range(VALUE_RANGE);
                count += 1;
            }
        }

        trace!(worker, rows = block.nrows(), count, "generated row block");
        count
    })
    .into_iter()
    .sum();

    debug!(n, workers = workers.get(), nnz = filled, "generated sparse matrix");
}
