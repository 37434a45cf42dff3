//! Conversion from dense storage to coordinate format

use std::ops::Range;

use tracing::debug;

use crate::matrix::config::WorkerCount;
use crate::matrix::{CoordinateMatrix, DenseMatrix};
use crate::utils::{contiguous_ranges, fan_out};

impl DenseMatrix {
    /// Converts this dense matrix to COO format
    ///
    /// Rows are split into contiguous blocks, one per worker. Each worker
    /// scans its block in row-major order into a local buffer, and the
    /// buffers are concatenated in worker order, so the result is identical
    /// for a given matrix and worker count.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparsebench::{DenseMatrix, WorkerCount};
    ///
    /// let m = DenseMatrix::from_rows(vec![vec![0, 2], vec![3, 0]]);
    /// let coo = m.to_coo(WorkerCount::new(2).unwrap());
    /// assert_eq!(coo.iter().collect::<Vec<_>>(), vec![(0, 1, 2), (1, 0, 3)]);
    /// ```
    pub fn to_coo(&self, workers: WorkerCount) -> CoordinateMatrix {
        let ranges = contiguous_ranges(self.dim(), workers.get());

        let partials = fan_out(ranges, |_, rows| self.extract_rows(rows));

        let nnz: usize = partials.iter().map(CoordinateMatrix::nnz).sum();
        let mut coo = CoordinateMatrix::with_capacity(nnz);
        for partial in partials {
            coo.append(partial);
        }

        debug!(n = self.dim(), workers = workers.get(), nnz, "converted dense matrix to COO");
        coo
    }

    /// Collects the non-zero cells of a block of rows
    fn extract_rows(&self, rows: Range<usize>) -> CoordinateMatrix {
        let first_row = rows.start;
        let block = self.row_block(rows);
        let mut local = CoordinateMatrix::empty();

        for (offset, row) in block.outer_iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if value != 0 {
                    local.push(first_row + offset, j, value);
                }
            }
        }

        local
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DenseMatrix {
        //    [1 2 0]
        //    [0 3 0]
        //    [4 0 5]
        DenseMatrix::from_rows(vec![vec![1, 2, 0], vec![0, 3, 0], vec![4, 0, 5]])
    }

    #[test]
    fn test_dense_to_coo_order() {
        let coo = sample().to_coo(WorkerCount::new(2).unwrap());

        assert_eq!(coo.rows(), &[0, 0, 1, 2, 2]);
        assert_eq!(coo.cols(), &[0, 1, 1, 0, 2]);
        assert_eq!(coo.vals(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_order_independent_of_worker_count() {
        let expected = sample().to_coo(WorkerCount::single());
        for workers in [2, 3, 4, 9] {
            let coo = sample().to_coo(WorkerCount::new(workers).unwrap());
            assert_eq!(coo, expected, "workers = {}", workers);
        }
    }

    #[test]
    fn test_empty_matrix() {
        let coo = DenseMatrix::zeros(0).to_coo(WorkerCount::new(4).unwrap());
        assert!(coo.is_empty());

        let coo = DenseMatrix::zeros(5).to_coo(WorkerCount::new(4).unwrap());
        assert!(coo.is_empty());
    }
}
