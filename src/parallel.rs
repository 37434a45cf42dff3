//! # Parallel COO × COO multiplication
//!
//! The entries of the left operand are split into contiguous index ranges,
//! one per worker. Each worker joins its slice of A against all of B into
//! an accumulator it owns outright; nothing is shared mutably while the
//! workers run. After every worker has joined, the calling thread merges
//! the local accumulators and emits the non-zero cells.
//!
//! Merging is a sum per `(row, col)` cell, which is associative and
//! commutative over integers, so the product is independent of the worker
//! count and of the merge order.

use tracing::{debug, trace};

use crate::accumulator::PartialAccumulator;
use crate::matrix::{CoordinateMatrix, WorkerCount};
use crate::utils::{contiguous_ranges, fan_out};

/// Multiplies two COO matrices using `workers` threads
///
/// Produces the same set of entries as
/// [`multiply_coo`](crate::multiply_coo) for every worker count; only the
/// order may differ. When A has fewer entries than there are workers the
/// surplus workers receive empty ranges and contribute nothing.
///
/// # Examples
///
/// ```
/// use sparsebench::{multiply_coo, multiply_coo_parallel, CoordinateMatrix, WorkerCount};
///
/// let a = CoordinateMatrix::from_triplets(vec![(0, 0, 1), (1, 1, 1)]);
/// let b = CoordinateMatrix::from_triplets(vec![(0, 0, 2), (1, 1, 2)]);
///
/// let workers = WorkerCount::new(4).unwrap();
/// let parallel = multiply_coo_parallel(&a, &b, workers).to_sorted();
/// let sequential = multiply_coo(&a, &b).to_sorted();
///
/// // Result should be a diagonal matrix with elements 2
/// assert_eq!(parallel, sequential);
/// assert_eq!(parallel.vals(), &[2, 2]);
/// ```
pub fn multiply_coo_parallel(
    a: &CoordinateMatrix,
    b: &CoordinateMatrix,
    workers: WorkerCount,
) -> CoordinateMatrix {
    // 1. Split A's entries into one contiguous range per worker
    let ranges = contiguous_ranges(a.nnz(), workers.get());

    // 2. Accumulate each slice independently
    let partials = fan_out(ranges, |worker, range| {
        let len = range.len();
        let mut local = PartialAccumulator::new();
        local.accumulate(a, range, b);
        trace!(worker, entries = len, cells = local.len(), "accumulated slice of A");
        local
    });

    // 3. Merge on the calling thread once all workers have joined
    let mut merged = PartialAccumulator::new();
    for partial in partials {
        merged.merge(partial);
    }

    // 4. Emit non-zero cells
    let c = merged.into_coo();
    debug!(
        a_nnz = a.nnz(),
        b_nnz = b.nnz(),
        c_nnz = c.nnz(),
        workers = workers.get(),
        "multiplied COO matrices in parallel"
    );
    c
}
