//! Configuration and worker-count handling

use crate::error::{Error, Result};

/// Number of worker threads a parallel stage fans out to
///
/// Always at least one. Derived once per run, usually from the hardware,
/// and passed unchanged to every parallel operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkerCount(usize);

impl WorkerCount {
    /// Creates a worker count, rejecting zero
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(Error::InvalidWorkerCount(workers));
        }
        Ok(Self(workers))
    }

    /// Uses the available hardware parallelism
    pub fn detect() -> Self {
        Self(num_cpus::get().max(1))
    }

    /// A single worker, i.e. sequential execution of a parallel stage
    pub fn single() -> Self {
        Self(1)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for WorkerCount {
    fn default() -> Self {
        Self::detect()
    }
}

/// Configuration for one benchmark run
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Matrix dimension n; asked for interactively when `None`
    pub size: Option<usize>,

    /// Worker count used by every parallel stage
    pub workers: WorkerCount,

    /// Seed for generation
    /// If None, a fresh seed is drawn from the OS entropy source
    pub seed: Option<u64>,

    /// Whether to run the dense classical baselines
    pub run_dense: bool,

    /// Whether to cross-check every product against the others
    pub verify: bool,

    /// Whether to pretty-print operands and product
    pub print: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            size: None,
            workers: WorkerCount::detect(),
            seed: None,
            run_dense: true,
            verify: false,
            print: false,
        }
    }
}
