use crate::record::{Record, SharedRecord};

/// One state of the search tree.
///
/// A node is owned by exactly one party at a time: the frontier while it is
/// pending, then the worker expanding it. `expand` consumes the node, and the
/// children it returns are handed over to the frontier.
///
/// Nodes from the same tree are expanded concurrently on different threads,
/// so `expand` must only touch its own fields and the shared record.
pub trait Node: Send + Sized + 'static {
    /// Record type improved by this tree.
    type Record: Record;

    /// Expands the node into its children.
    ///
    /// An empty vector marks a leaf or a pruned branch. A node may read the
    /// current best through `record` to cut branches against its bound, and
    /// offers finished solutions with [`SharedRecord::propose`].
    ///
    /// A panic here aborts the whole run.
    fn expand(self, record: &SharedRecord<Self::Record>) -> Vec<Self>;

    /// Returns `true` if `self` should be expanded after `other`.
    ///
    /// Only a scheduling preference: the final record does not depend on it.
    /// The default treats all nodes as equal, which makes the frontier FIFO.
    fn priority_less(&self, other: &Self) -> bool {
        let _ = other;
        false
    }
}
