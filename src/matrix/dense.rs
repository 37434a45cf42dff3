//! Dense square matrix storage
//!
//! Row-major n×n grid of integers backed by an ndarray `Array2`. Used as the
//! generation target, the input of the coordinate conversion and the operand
//! type of the classical baselines.

use std::fmt;
use std::ops::Range;

use ndarray::{s, Array2, ArrayView2, ArrayViewMut2, Axis};

use crate::Value;

/// A dense n×n matrix of integers, zero-initialized on creation
#[derive(Clone, PartialEq, Eq)]
pub struct DenseMatrix {
    data: Array2<Value>,
}

impl DenseMatrix {
    /// Creates an n×n matrix filled with zeros
    pub fn zeros(n: usize) -> Self {
        Self {
            data: Array2::zeros((n, n)),
        }
    }

    /// Builds a matrix from row vectors
    ///
    /// # Panics
    ///
    /// Panics if the rows do not form a square matrix.
    pub fn from_rows(rows: Vec<Vec<Value>>) -> Self {
        let n = rows.len();
        let mut data = Array2::zeros((n, n));

        for (i, row) in rows.into_iter().enumerate() {
            assert_eq!(row.len(), n, "row {} has {} entries, expected {}", i, row.len(), n);
            for (j, value) in row.into_iter().enumerate() {
                data[[i, j]] = value;
            }
        }

        Self { data }
    }

    /// Dimension n of the matrix
    pub fn dim(&self) -> usize {
        self.data.nrows()
    }

    pub fn get(&self, i: usize, j: usize) -> Value {
        self.data[[i, j]]
    }

    pub fn set(&mut self, i: usize, j: usize, value: Value) {
        self.data[[i, j]] = value;
    }

    /// Counts the non-zero cells
    pub fn nnz(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Read-only view of the underlying array
    pub fn as_array(&self) -> ArrayView2<'_, Value> {
        self.data.view()
    }

    pub(crate) fn as_array_mut(&mut self) -> ArrayViewMut2<'_, Value> {
        self.data.view_mut()
    }

    /// Read-only view of a contiguous block of rows
    pub fn row_block(&self, rows: Range<usize>) -> ArrayView2<'_, Value> {
        self.data.slice(s![rows, ..])
    }

    /// Splits the matrix into disjoint mutable row blocks
    ///
    /// `ranges` must be contiguous, start at row 0 and end at row n, as
    /// produced by [`contiguous_ranges`](crate::utils::contiguous_ranges).
    /// Each returned view owns exactly the rows of the matching range, so
    /// the views can be handed to different threads.
    pub fn split_row_blocks(&mut self, ranges: &[Range<usize>]) -> Vec<ArrayViewMut2<'_, Value>> {
        let n = self.dim();
        let mut blocks = Vec::with_capacity(ranges.len());
        let mut rest = self.data.view_mut();
        let mut next_row = 0;

        for range in ranges {
            assert_eq!(range.start, next_row, "row blocks must be contiguous");
            let (block, tail) = rest.split_at(Axis(0), range.len());
            blocks.push(block);
            rest = tail;
            next_row = range.end;
        }
        assert_eq!(next_row, n, "row blocks must cover all {} rows", n);

        blocks
    }
}

impl fmt::Display for DenseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.outer_iter() {
            write!(f, "| ")?;
            for value in row.iter() {
                write!(f, "{} | ", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for DenseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DenseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.dim(), self.dim())?;
        writeln!(f, "  nnz: {}", self.nnz())?;
        write!(f, "}}")
    }
}
