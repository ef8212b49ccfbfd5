mod execute;
mod frontier;
mod outstanding;

use crate::{
    config::SearchConfig,
    error::Result,
    executor::execute::SearchState,
    node::Node,
    sync::{Arc, run_workers},
    types::SearchOutcome,
};
use tracing::instrument;

/// Parallel best-first tree search driver.
///
/// A run seeds the frontier with the root, lets a pool of workers expand
/// nodes until the tree is exhausted, and returns the best record found.
/// Workers only communicate through:
/// - the frontier, a priority queue of pending nodes ordered by
///   [`Node::priority_less`];
/// - the outstanding-work count, which reaches zero exactly when no node is
///   queued or being expanded;
/// - the [`SharedRecord`](crate::record::SharedRecord) holding the best
///   record.
///
/// # Examples
/// ```
/// use ptree::{config::SearchConfig, executor::Executor, node::Node, record::{Record, SharedRecord}};
///
/// #[derive(Clone)]
/// struct Largest(u32);
///
/// impl Record for Largest {
///     fn better_than(&self, other: &Self) -> bool {
///         self.0 > other.0
///     }
/// }
///
/// /// Counts down from `n`, offering every value it visits.
/// struct Countdown(u32);
///
/// impl Node for Countdown {
///     type Record = Largest;
///
///     fn expand(self, record: &SharedRecord<Largest>) -> Vec<Self> {
///         record.propose(Largest(self.0));
///         (0..self.0).map(Countdown).collect()
///     }
/// }
///
/// let config = SearchConfig::builder().with_workers(2).build().expect("valid config");
/// let outcome = Executor::new(config).run(Countdown(4), Largest(0)).expect("no client panics");
/// assert_eq!(outcome.record.0, 4);
/// assert_eq!(outcome.stats.expanded, 16);
/// ```
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct Executor {
    config: SearchConfig,
}

impl Executor {
    /// Creates an executor running searches with `config`.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Configuration used by every run of this executor.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Explores the whole tree below `root` and returns the best record.
    ///
    /// `initial` is the starting best; it is returned unchanged when no node
    /// improves it. Blocks until every node has been expanded.
    ///
    /// # Errors
    /// - [`SearchError::ClientPanic`](crate::error::SearchError::ClientPanic)
    ///   if client code panicked on a worker; the run is aborted and its
    ///   pending nodes dropped.
    /// - [`SearchError::ThreadPool`](crate::error::SearchError::ThreadPool)
    ///   if the worker threads could not be started.
    ///
    /// # Panics
    /// In case of internal invariant violations. Impossible if there are no
    /// bugs in the code.
    #[instrument(
        name = "search.run",
        err,
        skip_all,
        fields(workers = self.config.workers().get()),
    )]
    pub fn run<N: Node>(&self, root: N, initial: N::Record) -> Result<SearchOutcome<N::Record>> {
        let workers = self.config.workers().get();
        let state = Arc::new(SearchState::new(root, initial));
        {
            let state = Arc::clone(&state);
            run_workers(workers, self.config.thread_name(), move |worker| {
                state.work(worker);
            })?;
        }
        // All workers have returned and dropped their handles.
        let state = Arc::into_inner(state).expect("Executor::run: [1]");
        state.finish(workers)
    }

    /// Like [`Executor::run`], without the statistics.
    ///
    /// # Errors
    /// See [`Executor::run`].
    pub fn run_record<N: Node>(&self, root: N, initial: N::Record) -> Result<N::Record> {
        self.run(root, initial).map(SearchOutcome::into_record)
    }
}

/// Runs a search with the default configuration: one worker per available
/// hardware thread.
///
/// # Errors
/// See [`Executor::run`].
pub fn parallel_tree<N: Node>(root: N, initial: N::Record) -> Result<N::Record> {
    Executor::default().run_record(root, initial)
}
