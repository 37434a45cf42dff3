// Matrix data structures and operations

pub mod config;
pub mod conversion;
pub mod coo;
pub mod dense;
pub mod reference;

pub use config::{BenchConfig, WorkerCount};
pub use coo::CoordinateMatrix;
pub use dense::DenseMatrix;
pub use reference::{classical_multiply, classical_multiply_parallel};
