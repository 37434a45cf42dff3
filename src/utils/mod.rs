//! Utility functions and helpers shared by the parallel stages

pub mod fanout;
pub mod partition;

pub use fanout::fan_out;
pub use partition::contiguous_ranges;
