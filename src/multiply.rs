//! Sequential COO × COO multiplication

use tracing::debug;

use crate::accumulator::PartialAccumulator;
use crate::matrix::CoordinateMatrix;

/// Multiplies two COO matrices on the calling thread
///
/// Every entry of `a` is joined against every entry of `b`; products of
/// matching pairs are summed per output cell and cells that sum to zero are
/// omitted. The order of the returned entries is unspecified; compare
/// results through [`CoordinateMatrix::to_sorted`].
///
/// # Examples
///
/// ```
/// use sparsebench::{multiply_coo, CoordinateMatrix};
///
/// // A = [[0, 2], [3, 0]], B = [[1, 0], [0, 4]]
/// let a = CoordinateMatrix::from_triplets(vec![(0, 1, 2), (1, 0, 3)]);
/// let b = CoordinateMatrix::from_triplets(vec![(0, 0, 1), (1, 1, 4)]);
///
/// let c = multiply_coo(&a, &b).to_sorted();
/// assert_eq!(c.iter().collect::<Vec<_>>(), vec![(0, 1, 8), (1, 0, 3)]);
/// ```
pub fn multiply_coo(a: &CoordinateMatrix, b: &CoordinateMatrix) -> CoordinateMatrix {
    let mut accumulator = PartialAccumulator::new();
    accumulator.accumulate(a, 0..a.nnz(), b);

    let c = accumulator.into_coo();
    debug!(a_nnz = a.nnz(), b_nnz = b.nnz(), c_nnz = c.nnz(), "multiplied COO matrices");
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_operands() {
        let a = CoordinateMatrix::empty();
        let b = CoordinateMatrix::from_triplets(vec![(0, 0, 1)]);

        assert!(multiply_coo(&a, &b).is_empty());
        assert!(multiply_coo(&b, &a).is_empty());
        assert!(multiply_coo(&a, &a).is_empty());
    }

    #[test]
    fn test_cancellation_is_suppressed() {
        // Row 0 of A = [1, -1], B = [[2], [2]] -> C[0][0] = 2 - 2 = 0
        let a = CoordinateMatrix::from_triplets(vec![(0, 0, 1), (0, 1, -1)]);
        let b = CoordinateMatrix::from_triplets(vec![(0, 0, 2), (1, 0, 2)]);

        assert!(multiply_coo(&a, &b).is_empty());
    }

    #[test]
    fn test_accumulates_over_inner_dimension() {
        // A = [1 2], B = [3; 4] -> 1*3 + 2*4 = 11
        let a = CoordinateMatrix::from_triplets(vec![(0, 0, 1), (0, 1, 2)]);
        let b = CoordinateMatrix::from_triplets(vec![(0, 0, 3), (1, 0, 4)]);

        let c = multiply_coo(&a, &b);
        assert_eq!(c.iter().collect::<Vec<_>>(), vec![(0, 0, 11)]);
    }
}
