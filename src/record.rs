use crate::sync::{Mutex, lock};
use derive_more::Debug;
use tracing::trace;

/// A candidate solution, compared under a client-defined order.
///
/// Whether the search maximizes or minimizes is encoded entirely in
/// [`Record::better_than`]. `Clone` must produce an independent value: a
/// snapshot handed to a node must not observe later updates to the shared
/// instance.
pub trait Record: Clone + Send + 'static {
    /// Returns `true` if `self` is strictly better than `other`.
    ///
    /// Must be a strict order, consistent across all records compared in one
    /// run.
    fn better_than(&self, other: &Self) -> bool;
}

/// The best record of a run, shared by every worker.
///
/// All access goes through one short critical section, so nodes can read and
/// improve the record without synchronizing on their own.
#[derive(Debug)]
#[debug("SharedRecord")]
pub struct SharedRecord<R> {
    inner: Mutex<Best<R>>,
}

struct Best<R> {
    record: R,
    improvements: usize,
}

impl<R: Record> SharedRecord<R> {
    pub(crate) fn new(initial: R) -> Self {
        Self {
            inner: Mutex::new(Best {
                record: initial,
                improvements: 0,
            }),
        }
    }

    /// Returns a copy of the current best record.
    #[must_use]
    pub fn snapshot(&self) -> R {
        lock(&self.inner).record.clone()
    }

    /// Installs `candidate` if it is better than the current best.
    ///
    /// The comparison and the store happen under the same lock, so a
    /// candidate that loses a race to a better record installed concurrently
    /// is rejected. Returns whether `candidate` was installed.
    pub fn propose(&self, candidate: R) -> bool {
        let mut best = lock(&self.inner);
        if !candidate.better_than(&best.record) {
            return false;
        }
        best.record = candidate;
        best.improvements += 1;
        trace!(improvements = best.improvements, "record improved");
        true
    }

    /// Inspects the current best record without cloning it.
    ///
    /// Meant for bound checks; keep `f` short, it runs under the record lock.
    pub fn read<T>(&self, f: impl FnOnce(&R) -> T) -> T {
        f(&lock(&self.inner).record)
    }

    /// Gives `f` exclusive mutable access to the current best record.
    ///
    /// The record is replaced in place, bypassing [`Record::better_than`];
    /// `f` is responsible for only ever making it better. Such changes are
    /// not counted by [`SharedRecord::improvements`].
    pub fn update<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        f(&mut lock(&self.inner).record)
    }

    /// Number of candidates accepted by [`SharedRecord::propose`] so far.
    #[must_use]
    pub fn improvements(&self) -> usize {
        lock(&self.inner).improvements
    }

    pub(crate) fn into_inner(self) -> R {
        self.inner
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .record
    }
}
