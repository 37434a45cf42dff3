//! # sparsebench: dense vs. sparse matrix multiplication
//!
//! Benchmarks square integer matrix multiplication in two representations,
//! each run both on one thread and fanned out over several workers.
//!
//! ## Overview
//!
//! The sparse pipeline has three stages:
//!
//! 1. **Generation**: every cell of an n×n matrix becomes non-zero with
//!    probability `1/n`, with a value drawn from 1..=100.
//!
//! 2. **Conversion**: the dense matrix is scanned into coordinate (COO)
//!    form, one block of rows per worker.
//!
//! 3. **Multiplication**: two COO matrices are multiplied either
//!    sequentially or by splitting the left operand's entries across
//!    workers, accumulating locally and merging after the join.
//!
//! The classical dense triple loop, sequential and parallel, is provided as
//! a baseline.
//!
//! ## Usage
//!
//! ```
//! use sparsebench::{generate_sparse, multiply_coo, multiply_coo_parallel, WorkerCount};
//!
//! let workers = WorkerCount::new(4).unwrap();
//! let a = generate_sparse(64, workers).to_coo(workers);
//! let b = generate_sparse(64, workers).to_coo(workers);
//!
//! let sequential = multiply_coo(&a, &b);
//! let parallel = multiply_coo_parallel(&a, &b, workers);
//! assert_eq!(sequential.to_sorted(), parallel.to_sorted());
//! ```

pub mod error;
pub mod generator;
pub mod matrix;
pub mod multiply;
pub mod parallel;
pub mod utils;

mod accumulator;

/// Scalar type stored in every matrix
pub type Value = i64;

// Re-export primary components
pub use error::{Error, Result};
pub use generator::{fill_sparse, fill_sparse_seeded, generate_sparse};
pub use matrix::{classical_multiply, classical_multiply_parallel};
pub use matrix::{BenchConfig, CoordinateMatrix, DenseMatrix, WorkerCount};
pub use multiply::multiply_coo;
pub use parallel::multiply_coo_parallel;

/// Version information for the sparsebench library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
