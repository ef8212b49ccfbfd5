use derive_more::{Display, From, Into};

/// Index of a worker thread within one run, in `0..workers`.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, From, Into)]
#[display("worker-{_0}")]
#[repr(transparent)]
pub struct WorkerId(usize);

impl WorkerId {
    /// Position of the worker in the pool.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Counters collected over one search run.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct SearchStats {
    /// Number of worker threads that took part in the run.
    pub workers: usize,
    /// Nodes whose `expand` returned, root included.
    pub expanded: usize,
    /// Children produced by all expansions.
    pub generated: usize,
    /// Expanded nodes that produced no children.
    pub leaves: usize,
    /// Record improvements accepted by the shared record.
    pub improvements: usize,
}

/// Result of a completed run: the final best record and run statistics.
#[must_use]
#[derive(Debug, Clone)]
pub struct SearchOutcome<R> {
    /// Best record found, or the initial one if nothing improved it.
    pub record: R,
    /// Statistics of the run.
    pub stats: SearchStats,
}

impl<R> SearchOutcome<R> {
    /// Drops the statistics and returns the record.
    pub fn into_record(self) -> R {
        self.record
    }
}
