//! Contiguous range partitioning shared by every parallel stage
//!
//! A range of `len` indices is split into `workers` nearly-equal contiguous
//! blocks. The first `len % workers` blocks receive one extra index, so
//! block sizes never differ by more than one.

use std::ops::Range;

/// Splits `0..len` into exactly `workers` contiguous ranges.
///
/// Ranges are returned in increasing order and together cover every index
/// exactly once. When `len < workers` the trailing ranges are empty.
///
/// # Panics
///
/// Panics if `workers` is zero.
///
/// # Examples
///
/// ```
/// use sparsebench::utils::contiguous_ranges;
///
/// let ranges = contiguous_ranges(10, 3);
/// assert_eq!(ranges, vec![0..4, 4..7, 7..10]);
/// ```
pub fn contiguous_ranges(len: usize, workers: usize) -> Vec<Range<usize>> {
    assert!(workers > 0, "worker count must be at least 1");

    let base = len / workers;
    let remainder = len % workers;

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;

    for t in 0..workers {
        let end = start + base + usize::from(t < remainder);
        ranges.push(start..end);
        start = end;
    }

    ranges
}
