use crate::error::{Result, SearchError};
use core::num::NonZeroUsize;

const DEFAULT_THREAD_NAME: &str = "ptree-worker";

/// Runtime configuration of an [`Executor`](crate::executor::Executor).
///
/// # Examples
/// ```
/// use ptree::config::SearchConfig;
///
/// let config = SearchConfig::builder()
///     .with_workers(2)
///     .build()
///     .expect("two workers is a valid configuration");
/// assert_eq!(config.workers().get(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    workers: NonZeroUsize,
    thread_name: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
        }
    }
}

impl SearchConfig {
    /// Starts a builder populated with the defaults.
    #[must_use]
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }

    /// Number of worker threads expanding nodes.
    #[must_use]
    pub fn workers(&self) -> NonZeroUsize {
        self.workers
    }

    /// Prefix of worker thread names; threads are named `{prefix}-{index}`.
    #[must_use]
    pub fn thread_name(&self) -> &str {
        &self.thread_name
    }
}

/// Validating builder for [`SearchConfig`].
///
/// Workers default to the available hardware parallelism, falling back to a
/// single worker when it cannot be queried.
#[derive(Debug, Clone)]
pub struct SearchConfigBuilder {
    workers: usize,
    thread_name: String,
}

impl Default for SearchConfigBuilder {
    fn default() -> Self {
        Self {
            workers: default_workers().get(),
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
        }
    }
}

impl SearchConfigBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the worker count.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Overrides the worker thread name prefix.
    #[must_use]
    pub fn with_thread_name(mut self, prefix: impl Into<String>) -> Self {
        self.thread_name = prefix.into();
        self
    }

    /// Returns the configured worker count.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`SearchError::InvalidWorkerCount`] if the worker count is zero.
    pub fn build(self) -> Result<SearchConfig> {
        let workers = NonZeroUsize::new(self.workers).ok_or(SearchError::InvalidWorkerCount {
            got: self.workers,
        })?;
        Ok(SearchConfig {
            workers,
            thread_name: self.thread_name,
        })
    }
}

fn default_workers() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}
