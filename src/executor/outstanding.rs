use crate::sync::{AtomicUsize, Ordering};

/// Count of nodes that are queued or being expanded.
///
/// A node is counted from the moment it is pushed until its expansion has
/// been settled. The count reaches zero exactly once, when the tree is
/// exhausted.
#[must_use]
#[derive(Debug)]
#[repr(align(128))]
pub(crate) struct OutstandingWork {
    count: AtomicUsize,
}

/// What [`OutstandingWork::settle`] observed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Settled {
    /// Other nodes are still queued or in flight.
    Running,
    /// The settled node was the last outstanding one.
    Terminated,
}

impl OutstandingWork {
    /// Starts with the root counted.
    pub(crate) fn with_root() -> Self {
        Self {
            count: AtomicUsize::new(1),
        }
    }

    /// Accounts for one finished expansion that produced `children` nodes.
    ///
    /// Removing the expanded node and adding its children is a single atomic
    /// adjustment, applied before the children are pushed: the count never
    /// touches zero while any of them is pending.
    ///
    /// # Panics
    /// If called more often than nodes were counted.
    pub(crate) fn settle(&self, children: usize) -> Settled {
        if let Some(extra) = children.checked_sub(1) {
            if extra != 0 {
                let prev = self.count.fetch_add(extra, Ordering::AcqRel);
                assert_ne!(prev, 0, "OutstandingWork::settle: settled an uncounted node");
            }
            return Settled::Running;
        }
        let prev = self.count.fetch_sub(1, Ordering::AcqRel);
        assert_ne!(prev, 0, "OutstandingWork::settle: counter underflow");
        if prev == 1 {
            Settled::Terminated
        } else {
            Settled::Running
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self) -> usize {
        self.count.load(Ordering::Acquire)
    }
}
