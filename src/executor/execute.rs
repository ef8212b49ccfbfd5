use crate::{
    error::{Result, SearchError},
    executor::{
        frontier::Frontier,
        outstanding::{OutstandingWork, Settled},
    },
    node::Node,
    record::SharedRecord,
    sync::{AtomicUsize, Mutex, Ordering, lock},
    types::{SearchOutcome, SearchStats, WorkerId},
};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, error, info};

/// Everything the workers of one run share.
pub(super) struct SearchState<N: Node> {
    frontier: Frontier<N>,
    outstanding: OutstandingWork,
    record: SharedRecord<N::Record>,
    /// First client fault of the run.
    fault: Mutex<Option<SearchError>>,
    expanded: AtomicUsize,
    generated: AtomicUsize,
    leaves: AtomicUsize,
}

/// Per-worker counters, folded into the shared totals on exit.
#[derive(Debug, Default)]
struct Tally {
    expanded: usize,
    generated: usize,
    leaves: usize,
}

impl<N: Node> SearchState<N> {
    /// Seeds a run: `root` is the only pending node and already counted.
    pub(super) fn new(root: N, initial: N::Record) -> Self {
        let frontier = Frontier::new();
        frontier.push(root);
        Self {
            frontier,
            outstanding: OutstandingWork::with_root(),
            record: SharedRecord::new(initial),
            fault: Mutex::new(None),
            expanded: AtomicUsize::new(0),
            generated: AtomicUsize::new(0),
            leaves: AtomicUsize::new(0),
        }
    }

    /// Worker loop: pop, expand, settle, push, until the frontier closes.
    ///
    /// The outstanding count is adjusted before the children are pushed, so
    /// no other worker can expand and settle a child that is not yet counted.
    ///
    /// Client code runs in `expand`, but also in `priority_less` while the
    /// frontier reorders and in node destructors. A panic in any of them
    /// aborts the run.
    pub(super) fn work(&self, worker: WorkerId) {
        debug!(%worker, "worker started");
        let mut tally = Tally::default();
        let drained = panic::catch_unwind(AssertUnwindSafe(|| self.drain(worker, &mut tally)));
        if let Err(payload) = drained {
            self.abort(SearchError::from_panic(worker, &*payload));
        }
        self.expanded.fetch_add(tally.expanded, Ordering::Relaxed);
        self.generated.fetch_add(tally.generated, Ordering::Relaxed);
        self.leaves.fetch_add(tally.leaves, Ordering::Relaxed);
        debug!(%worker, expanded = tally.expanded, "worker finished");
    }

    fn drain(&self, worker: WorkerId, tally: &mut Tally) {
        while let Some(node) = self.frontier.pop() {
            let children = node.expand(&self.record);
            tally.expanded += 1;
            tally.generated += children.len();
            if children.is_empty() {
                tally.leaves += 1;
            }
            match self.outstanding.settle(children.len()) {
                Settled::Running => self.frontier.push_all(children),
                Settled::Terminated => {
                    debug!(%worker, "search tree exhausted");
                    self.frontier.close();
                }
            }
        }
    }

    /// Records the first fault and stops every worker.
    fn abort(&self, fault: SearchError) {
        error!(%fault, "aborting search");
        {
            let mut slot = lock(&self.fault);
            if slot.is_none() {
                *slot = Some(fault);
            }
        }
        // Closing drops pending nodes; a second panic from their destructors
        // must not unwind past the recorded fault.
        let _ = panic::catch_unwind(AssertUnwindSafe(|| self.frontier.close()));
    }

    /// Turns the state of a finished run into its outcome.
    ///
    /// # Errors
    /// The first client fault, if the run was aborted.
    pub(super) fn finish(self, workers: usize) -> Result<SearchOutcome<N::Record>> {
        let Self {
            frontier,
            outstanding: _,
            record,
            fault,
            expanded,
            generated,
            leaves,
        } = self;
        drop(frontier);
        if let Some(fault) = fault
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
        {
            return Err(fault);
        }
        let stats = SearchStats {
            workers,
            expanded: expanded.load(Ordering::Acquire),
            generated: generated.load(Ordering::Acquire),
            leaves: leaves.load(Ordering::Acquire),
            improvements: record.improvements(),
        };
        info!(
            expanded = stats.expanded,
            generated = stats.generated,
            improvements = stats.improvements,
            "search finished"
        );
        Ok(SearchOutcome {
            record: record.into_inner(),
            stats,
        })
    }
}
