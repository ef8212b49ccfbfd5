//! Error types returned by the search engine.

use thiserror::Error;

use crate::types::WorkerId;

/// Error produced when configuring or running a search.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SearchError {
    /// The worker pool must contain at least one thread.
    #[error("workers must be at least 1 (got {got})")]
    InvalidWorkerCount {
        /// The invalid worker count supplied by the caller.
        got: usize,
    },
    /// The worker pool could not be started.
    #[error("failed to start the worker pool: {0}")]
    ThreadPool(String),
    /// Client code panicked on a worker thread; the run was aborted.
    #[error("client code panicked on {worker}: {message}")]
    ClientPanic {
        /// Worker whose expansion panicked.
        worker: WorkerId,
        /// Panic payload, if it was a string.
        message: String,
    },
}

impl SearchError {
    pub(crate) fn from_panic(worker: WorkerId, payload: &(dyn std::any::Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|msg| (*msg).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_owned());
        Self::ClientPanic { worker, message }
    }
}

/// Convenient alias for results returned by the engine.
pub type Result<T> = core::result::Result<T, SearchError>;
