//! Partial-product accumulation for COO multiplication
//!
//! Scratch state private to a single multiplication call: products are
//! summed per `(row, col)` in a nested hash map, then emitted as COO with
//! cancelled cells dropped.

use std::collections::HashMap;
use std::ops::Range;

use crate::matrix::CoordinateMatrix;
use crate::Value;

/// Sums of partial products keyed by row, then column
#[derive(Debug, Default)]
pub(crate) struct PartialAccumulator {
    cells: HashMap<usize, HashMap<usize, Value>>,
}

impl PartialAccumulator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, row: usize, col: usize, value: Value) {
        *self.cells.entry(row).or_default().entry(col).or_insert(0) += value;
    }

    /// Accumulates the products of A's entries in `range` with all of B
    ///
    /// Naive join: every selected entry of A is compared with every entry of
    /// B, and matching pairs (`col_a == row_b`) contribute
    /// `val_a * val_b` at `(row_a, col_b)`.
    pub(crate) fn accumulate(
        &mut self,
        a: &CoordinateMatrix,
        range: Range<usize>,
        b: &CoordinateMatrix,
    ) {
        let a_rows = &a.rows()[range.clone()];
        let a_cols = &a.cols()[range.clone()];
        let a_vals = &a.vals()[range];

        for ((&row_a, &col_a), &val_a) in a_rows.iter().zip(a_cols).zip(a_vals) {
            for (row_b, col_b, val_b) in b.iter() {
                if row_b == col_a {
                    self.add(row_a, col_b, val_a * val_b);
                }
            }
        }
    }

    /// Folds another accumulator into this one by summing shared cells
    ///
    /// Integer addition is associative and commutative, so the merged sums
    /// do not depend on the order accumulators are merged in.
    pub(crate) fn merge(&mut self, other: PartialAccumulator) {
        for (row, col_map) in other.cells {
            let target = self.cells.entry(row).or_default();
            for (col, value) in col_map {
                *target.entry(col).or_insert(0) += value;
            }
        }
    }

    /// Number of `(row, col)` cells currently held, zeros included
    pub(crate) fn len(&self) -> usize {
        self.cells.values().map(HashMap::len).sum()
    }

    /// Emits one entry per cell with a non-zero sum
    pub(crate) fn into_coo(self) -> CoordinateMatrix {
        let mut coo = CoordinateMatrix::with_capacity(self.len());
        for (row, col_map) in self.cells {
            for (col, value) in col_map {
                if value != 0 {
                    coo.push(row, col, value);
                }
            }
        }
        coo
    }
}
