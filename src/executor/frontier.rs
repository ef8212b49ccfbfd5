use crate::{
    node::Node,
    sync::{Condvar, Mutex, lock},
};
use core::cmp::Ordering;
use std::collections::BinaryHeap;

/// Concurrent max-priority queue of pending nodes.
///
/// Ordered by [`Node::priority_less`]; nodes of equal priority leave in
/// insertion order, so none of them waits forever behind later arrivals.
pub(crate) struct Frontier<N> {
    queue: Mutex<Queue<N>>,
    available: Condvar,
}

struct Queue<N> {
    heap: BinaryHeap<Entry<N>>,
    next_seq: u64,
    closed: bool,
}

struct Entry<N> {
    seq: u64,
    node: N,
}

impl<N: Node> Ord for Entry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.node.priority_less(&other.node) {
            Ordering::Less
        } else if other.node.priority_less(&self.node) {
            Ordering::Greater
        } else {
            // Max-heap: the older entry compares greater.
            other.seq.cmp(&self.seq)
        }
    }
}

impl<N: Node> PartialOrd for Entry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Node> PartialEq for Entry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Node> Eq for Entry<N> {}

impl<N: Node> Queue<N> {
    fn insert(&mut self, node: N) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { seq, node });
    }

    /// Highest-priority pending node, `None` when empty or closed.
    fn take(&mut self) -> Option<N> {
        if self.closed {
            return None;
        }
        self.heap.pop().map(|entry| entry.node)
    }
}

impl<N: Node> Frontier<N> {
    pub(crate) fn new() -> Self {
        Self {
            queue: Mutex::new(Queue {
                heap: BinaryHeap::new(),
                next_seq: 0,
                closed: false,
            }),
            available: Condvar::new(),
        }
    }

    pub(crate) fn push(&self, node: N) {
        self.push_all(vec![node]);
    }

    /// Enqueues `nodes` and wakes as many waiting workers.
    ///
    /// Nodes pushed after [`Frontier::close`] are dropped.
    pub(crate) fn push_all(&self, nodes: Vec<N>) {
        let count = nodes.len();
        {
            let mut queue = lock(&self.queue);
            if queue.closed {
                return;
            }
            for node in nodes {
                queue.insert(node);
            }
        }
        match count {
            0 => {}
            1 => self.available.notify_one(),
            _ => self.available.notify_all(),
        }
    }

    /// Removes the highest-priority node, if any, without blocking.
    ///
    /// Workers always use the blocking [`Frontier::pop`], which shares the
    /// same removal step; this entry point is kept for tests.
    #[cfg(test)]
    pub(crate) fn try_pop(&self) -> Option<N> {
        lock(&self.queue).take()
    }

    /// Removes the highest-priority node, waiting for one to arrive.
    ///
    /// Returns `None` once the frontier is closed.
    pub(crate) fn pop(&self) -> Option<N> {
        let mut queue = lock(&self.queue);
        loop {
            if queue.closed {
                return None;
            }
            if let Some(node) = queue.take() {
                return Some(node);
            }
            queue = self
                .available
                .wait(queue)
                .unwrap_or_else(std::sync::PoisonError::into_inner);
        }
    }

    /// Closes the frontier, dropping pending nodes and releasing every
    /// blocked [`Frontier::pop`].
    pub(crate) fn close(&self) {
        let pending = {
            let mut queue = lock(&self.queue);
            queue.closed = true;
            core::mem::take(&mut queue.heap)
        };
        self.available.notify_all();
        // Client destructors run outside the lock.
        drop(pending);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        lock(&self.queue).heap.len()
    }
}

#[cfg(all(test, not(feature = "loom")))]
mod tests {
    use super::*;
    use crate::record::{Record, SharedRecord};
    use std::{sync::Arc, thread, time::Duration};

    #[derive(Debug, Clone, Copy)]
    struct Unit;

    impl Record for Unit {
        fn better_than(&self, _other: &Self) -> bool {
            false
        }
    }

    #[derive(Debug, PartialEq, Eq)]
    struct Ranked {
        rank: u32,
        tag: &'static str,
    }

    impl Node for Ranked {
        type Record = Unit;

        fn expand(self, _record: &SharedRecord<Unit>) -> Vec<Self> {
            vec![]
        }

        fn priority_less(&self, other: &Self) -> bool {
            self.rank < other.rank
        }
    }

    fn ranked(rank: u32, tag: &'static str) -> Ranked {
        Ranked { rank, tag }
    }

    fn drain(frontier: &Frontier<Ranked>) -> Vec<&'static str> {
        core::iter::from_fn(|| frontier.try_pop()).map(|node| node.tag).collect()
    }

    #[test]
    fn pops_highest_priority_first() {
        let frontier = Frontier::new();
        frontier.push_all(vec![ranked(1, "low"), ranked(9, "high"), ranked(5, "mid")]);
        assert_eq!(frontier.len(), 3);
        assert_eq!(drain(&frontier), ["high", "mid", "low"]);
        assert!(frontier.try_pop().is_none());
    }

    #[test]
    fn equal_priorities_leave_in_insertion_order() {
        let frontier = Frontier::new();
        frontier.push(ranked(2, "a"));
        frontier.push(ranked(2, "b"));
        frontier.push(ranked(3, "top"));
        frontier.push(ranked(2, "c"));
        assert_eq!(drain(&frontier), ["top", "a", "b", "c"]);
    }

    #[test]
    fn close_drops_pending_nodes() {
        let frontier = Frontier::new();
        frontier.push_all(vec![ranked(1, "a"), ranked(2, "b")]);
        frontier.close();
        assert_eq!(frontier.len(), 0);
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn close_releases_blocked_pop() {
        let frontier = Arc::new(Frontier::<Ranked>::new());
        let waiter = {
            let frontier = Arc::clone(&frontier);
            thread::spawn(move || frontier.pop())
        };
        thread::sleep(Duration::from_millis(20));
        frontier.close();
        assert!(waiter.join().expect("waiter panicked").is_none());

        frontier.push(ranked(1, "late"));
        assert_eq!(frontier.len(), 0);
        assert!(frontier.try_pop().is_none());
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn blocked_pop_receives_pushed_node() {
        let frontier = Arc::new(Frontier::<Ranked>::new());
        let waiter = {
            let frontier = Arc::clone(&frontier);
            thread::spawn(move || frontier.pop())
        };
        thread::sleep(Duration::from_millis(20));
        frontier.push(ranked(4, "wake"));
        let popped = waiter.join().expect("waiter panicked");
        assert_eq!(popped, Some(ranked(4, "wake")));
    }
}
