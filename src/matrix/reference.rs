//! Classical dense multiplication baselines
//!
//! These are the triple-loop algorithms the sparse kernels are measured
//! against. They also serve as an independent oracle in the tests.

use ndarray::Axis;
use rayon::prelude::*;

use crate::matrix::DenseMatrix;
use crate::Value;

/// Multiplies two dense matrices with the classical i-j-k triple loop
pub fn classical_multiply(a: &DenseMatrix, b: &DenseMatrix) -> DenseMatrix {
    assert_eq!(
        a.dim(),
        b.dim(),
        "Matrix dimensions must be compatible for multiplication"
    );

    let n = a.dim();
    let a = a.as_array();
    let b = b.as_array();
    let mut c = DenseMatrix::zeros(n);

    for i in 0..n {
        for j in 0..n {
            let mut sum: Value = 0;
            for k in 0..n {
                sum += a[[i, k]] * b[[k, j]];
            }
            c.set(i, j, sum);
        }
    }

    c
}

/// Multiplies two dense matrices, computing output rows in parallel
///
/// Each output row is written by exactly one task, so no synchronization is
/// needed beyond the implicit join at the end of the parallel iterator.
pub fn classical_multiply_parallel(a: &DenseMatrix, b: &DenseMatrix) -> DenseMatrix {
    assert_eq!(
        a.dim(),
        b.dim(),
        "Matrix dimensions must be compatible for multiplication"
    );

    let n = a.dim();
    let a = a.as_array();
    let b = b.as_array();
    let mut c = DenseMatrix::zeros(n);

    c.as_array_mut()
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, mut row)| {
            for j in 0..n {
                let mut sum: Value = 0;
                for k in 0..n {
                    sum += a[[i, k]] * b[[k, j]];
                }
                row[j] = sum;
            }
        });

    c
}
