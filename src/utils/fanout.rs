//! Fixed-size worker fan-out with a join barrier
//!
//! Every parallel stage builds a rayon pool with one thread per work item,
//! runs the items on it, and hands the results back in item order once all
//! of them have finished. The pool is dropped at the end of the call.

use rayon::prelude::*;
use tracing::warn;

/// Runs `work(index, item)` for every item on a pool sized to the item count
/// and collects the results in item order.
///
/// A panicking worker is re-raised on the calling thread after the join,
/// so callers never observe a partial result. If the pool cannot be built
/// the items run on rayon's global pool instead.
pub fn fan_out<I, T, F>(items: Vec<I>, work: F) -> Vec<T>
where
    I: Send,
    T: Send,
    F: Fn(usize, I) -> T + Sync,
{
    if items.is_empty() {
        return Vec::new();
    }

    let workers = items.len();
    let run = || -> Vec<T> {
        items
            .into_par_iter()
            .enumerate()
            .map(|(index, item)| work(index, item))
            .collect()
    };

    match rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|index| format!("sparsebench-worker-{index}"))
        .build()
    {
        Ok(pool) => pool.install(run),
        Err(err) => {
            warn!(workers, %err, "failed to build worker pool, using the global pool");
            run()
        }
    }
}
