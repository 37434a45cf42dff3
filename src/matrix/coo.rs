//! Coordinate (COO) sparse matrix format implementation

use std::fmt;

use crate::matrix::DenseMatrix;
use crate::Value;

/// A sparse matrix in coordinate (COO) format
///
/// The COO format stores a sparse matrix using three arrays of equal length:
/// - rows: row index of each non-zero element
/// - cols: column index of each non-zero element
/// - vals: the non-zero values
///
/// Entry `i` is the value `vals[i]` at `(rows[i], cols[i])`. Entries are not
/// required to be sorted. The conversion and multiplication routines never
/// repeat a `(row, col)` pair, but [`new`](Self::new) and
/// [`from_triplets`](Self::from_triplets) store their input as given,
/// duplicates included. [`to_sorted`](Self::to_sorted) folds duplicates.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct CoordinateMatrix {
    rows: Vec<usize>,
    cols: Vec<usize>,
    vals: Vec<Value>,
}

impl CoordinateMatrix {
    /// Creates a COO matrix from its three sequences
    ///
    /// Entries are stored as given; repeated coordinates are not merged.
    ///
    /// # Panics
    ///
    /// Panics if the three sequences have different lengths.
    pub fn new(rows: Vec<usize>, cols: Vec<usize>, vals: Vec<Value>) -> Self {
        assert_eq!(rows.len(), cols.len(), "rows.len() must equal cols.len()");
        assert_eq!(rows.len(), vals.len(), "rows.len() must equal vals.len()");

        Self { rows, cols, vals }
    }

    /// Creates a matrix with no stored entries
    pub fn empty() -> Self {
        Self::default()
    }

    /// Collects `(row, col, value)` triplets without merging duplicates
    pub fn from_triplets<I>(triplets: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, Value)>,
    {
        let mut matrix = Self::empty();
        for (row, col, val) in triplets {
            matrix.push(row, col, val);
        }
        matrix
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
            cols: Vec::with_capacity(capacity),
            vals: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, row: usize, col: usize, val: Value) {
        self.rows.push(row);
        self.cols.push(col);
        self.vals.push(val);
    }

    /// Appends all entries of `other`, preserving their order
    pub(crate) fn append(&mut self, other: CoordinateMatrix) {
        self.rows.extend(other.rows);
        self.cols.extend(other.cols);
        self.vals.extend(other.vals);
    }

    /// Returns the number of stored entries
    pub fn nnz(&self) -> usize {
        self.vals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn cols(&self) -> &[usize] {
        &self.cols
    }

    pub fn vals(&self) -> &[Value] {
        &self.vals
    }

    /// Returns an iterator over the stored entries as `(row, col, value)`
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Value)> + '_ {
        self.rows
            .iter()
            .zip(&self.cols)
            .zip(&self.vals)
            .map(|((&row, &col), &val)| (row, col, val))
    }

    /// Returns the canonical form: row-major order, one entry per cell
    ///
    /// Entries sharing a coordinate are summed and cells whose sum is zero
    /// are dropped. Multiplication output order is unspecified; this form is
    /// what comparisons between strategies go through.
    pub fn to_sorted(&self) -> Self {
        let mut triplets: Vec<_> = self.iter().collect();
        triplets.sort_unstable_by_key(|&(row, col, _)| (row, col));

        let mut merged: Vec<(usize, usize, Value)> = Vec::with_capacity(triplets.len());
        for (row, col, val) in triplets {
            match merged.last_mut() {
                Some(last) if last.0 == row && last.1 == col => last.2 += val,
                _ => merged.push((row, col, val)),
            }
        }

        Self::from_triplets(merged.into_iter().filter(|&(_, _, val)| val != 0))
    }

    /// Reconstructs an n×n dense matrix
    ///
    /// Duplicate coordinates are summed and absent coordinates are zero.
    ///
    /// # Panics
    ///
    /// Panics if an entry lies outside the n×n grid.
    pub fn to_dense(&self, n: usize) -> DenseMatrix {
        let mut dense = DenseMatrix::zeros(n);
        for (row, col, val) in self.iter() {
            assert!(
                row < n && col < n,
                "entry ({}, {}) out of bounds for dimension {}",
                row,
                col,
                n
            );
            let current = dense.get(row, col);
            dense.set(row, col, current + val);
        }
        dense
    }
}

impl fmt::Debug for CoordinateMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CoordinateMatrix {{")?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        let max_entries = 10.min(self.nnz());
        if max_entries > 0 {
            writeln!(f, "  content sample:")?;
            for (row, col, val) in self.iter().take(max_entries) {
                writeln!(f, "    ({}, {}) = {:?}", row, col, val)?;
            }
            if self.nnz() > max_entries {
                writeln!(f, "    ... ({} more)", self.nnz() - max_entries)?;
            }
        }

        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matrix() {
        let m = CoordinateMatrix::new(vec![0, 2], vec![1, 0], vec![4, 5]);
        assert_eq!(m.nnz(), 2);
        assert!(!m.is_empty());
        assert_eq!(m.iter().collect::<Vec<_>>(), vec![(0, 1, 4), (2, 0, 5)]);
    }

    #[test]
    #[should_panic(expected = "rows.len() must equal vals.len()")]
    fn test_inconsistent_lengths() {
        CoordinateMatrix::new(vec![0, 1], vec![0, 1], vec![1]);
    }

    #[test]
    fn test_to_sorted() {
        let m = CoordinateMatrix::from_triplets(vec![(2, 1, 4), (0, 2, 6), (2, 0, 5)]);
        let sorted = m.to_sorted();
        assert_eq!(
            sorted.iter().collect::<Vec<_>>(),
            vec![(0, 2, 6), (2, 0, 5), (2, 1, 4)]
        );
    }

    #[test]
    fn test_constructors_keep_duplicates() {
        let m = CoordinateMatrix::from_triplets(vec![(0, 0, 1), (0, 0, 2)]);
        assert_eq!(m.nnz(), 2);
    }

    #[test]
    fn test_to_sorted_folds_duplicates() {
        let m = CoordinateMatrix::from_triplets(vec![(0, 0, 1), (1, 0, 4), (0, 0, 2)]);
        let sorted = m.to_sorted();
        assert_eq!(sorted.nnz(), 2);
        assert_eq!(sorted.iter().collect::<Vec<_>>(), vec![(0, 0, 3), (1, 0, 4)]);
    }

    #[test]
    fn test_to_sorted_drops_cancelled_and_zero_cells() {
        let m = CoordinateMatrix::new(vec![0, 1, 0, 2], vec![1, 1, 1, 2], vec![5, 0, -5, 6]);
        assert_eq!(m.to_sorted().iter().collect::<Vec<_>>(), vec![(2, 2, 6)]);
    }

    #[test]
    fn test_to_dense_sums_duplicates() {
        let m = CoordinateMatrix::from_triplets(vec![(0, 0, 1), (1, 1, 2), (0, 0, 3)]);
        let dense = m.to_dense(2);
        assert_eq!(dense, DenseMatrix::from_rows(vec![vec![4, 0], vec![0, 2]]));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_to_dense_out_of_bounds() {
        CoordinateMatrix::from_triplets(vec![(3, 0, 1)]).to_dense(2);
    }

    #[test]
    fn test_empty() {
        let m = CoordinateMatrix::empty();
        assert!(m.is_empty());
        assert_eq!(m.to_dense(0).dim(), 0);
    }
}
