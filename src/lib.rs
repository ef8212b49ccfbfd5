//! Parallel best-first tree search with a globally shared best record.
//!
//! Client code describes a search tree with two traits:
//! - [`Node`](node::Node): one state of the tree. `expand` turns it into
//!   children (none for a leaf or a pruned branch), `priority_less` says
//!   which pending nodes should be expanded first.
//! - [`Record`](record::Record): a candidate solution. `better_than` is the
//!   client's strict order, which decides whether the search maximizes or
//!   minimizes.
//!
//! The [`Executor`](executor::Executor) expands the tree on a pool of worker
//! threads. Every worker sees the same
//! [`SharedRecord`](record::SharedRecord) and can read or improve it without
//! any locking of its own; the engine keeps every access in one short
//! critical section. A run ends when no node is queued or being expanded.
//!
//! Quick start:
//! 1. Implement `Record` for the solution type.
//! 2. Implement `Node` for the tree state; offer finished solutions with
//!    `SharedRecord::propose`.
//! 3. Call [`parallel_tree`](executor::parallel_tree) with the root and the
//!    initial record, or build an `Executor` from a
//!    [`SearchConfig`](config::SearchConfig) to choose the worker count.
//!
//! The tree is assumed finite: pending nodes are kept in memory until they
//! are expanded, and a run does not stop before the tree is exhausted.

/// Runtime configuration: worker count and thread naming.
pub mod config;
/// Error type and result alias of the engine.
pub mod error;
/// The search driver, its frontier and termination detection.
///
/// Contains the worker loop and the outstanding-work protocol that decides
/// when the tree is exhausted.
pub mod executor;
/// The `Node` trait implemented by client search trees.
pub mod node;
/// The `Record` trait and the `SharedRecord` wrapper shared by all workers.
pub mod record;
mod sync;
/// Worker identifiers and run statistics.
pub mod types;
