#[cfg(feature = "loom")]
mod imp {
    use crate::{error::SearchError, types::WorkerId};
    pub(crate) use loom::sync::{
        Condvar, Mutex, MutexGuard,
        atomic::{AtomicUsize, Ordering},
    };
    use loom::thread;
    pub(crate) use std::sync::Arc;

    pub(crate) fn run_workers(
        workers: usize,
        _thread_name: &str,
        worker: impl Fn(WorkerId) + Send + Sync + 'static,
    ) -> Result<(), SearchError> {
        let worker = Arc::new(worker);
        let handles: Vec<_> = (0..workers)
            .map(|idx| {
                let worker = Arc::clone(&worker);
                thread::spawn(move || worker(WorkerId::from(idx)))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        Ok(())
    }
}

#[cfg(not(feature = "loom"))]
mod imp {
    use crate::{error::SearchError, types::WorkerId};
    pub(crate) use std::sync::{
        Arc, Condvar, Mutex, MutexGuard,
        atomic::{AtomicUsize, Ordering},
    };

    /// Runs `worker` once on each thread of a dedicated pool and returns after
    /// every invocation has finished.
    pub(crate) fn run_workers(
        workers: usize,
        thread_name: &str,
        worker: impl Fn(WorkerId) + Send + Sync + 'static,
    ) -> Result<(), SearchError> {
        let prefix = thread_name.to_owned();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(move |idx| format!("{prefix}-{idx}"))
            .build()
            .map_err(|err| SearchError::ThreadPool(err.to_string()))?;
        // Every worker blocks on the frontier while idle, so each one needs a
        // pool thread of its own. `scope` waits on a pool thread which steals
        // the last spawned job, so `workers` threads suffice.
        let worker = &worker;
        pool.scope(|scope| {
            for idx in 0..workers {
                scope.spawn(move |_| worker(WorkerId::from(idx)));
            }
        });
        Ok(())
    }
}

pub(crate) use imp::*;

/// Locks `mutex`, recovering the guard if a client panic poisoned it.
///
/// A poisoned lock only ever follows a client fault, which already aborts the
/// run through the fault path.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
