// src/tree/node.rs

use std::sync::atomic::{AtomicBool, Ordering};

/// Index of a node within its owning [`Tree`](crate::tree::Tree) arena.
pub type NodeId = usize;

/// A single tree vertex.
///
/// `label`, `parent` and `children` are write-once at construction and read
/// freely from any thread afterwards. Only the two flags mutate during a
/// run, and both are monotonic (false→true, never reversed):
///
/// - `done` is published with `Release` by the one worker that executed
///   this node's computation, and observed with `Acquire` by whichever
///   sibling-completion path checks the parent's readiness.
/// - `queued` is claimed with a single compare-and-set, so a node can be
///   handed to the work queue at most once no matter how many callers race.
#[derive(Debug)]
pub struct Node {
    label: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    done: AtomicBool,
    queued: AtomicBool,
}

impl Node {
    pub(crate) fn new(label: String, parent: Option<NodeId>) -> Self {
        Self {
            label,
            parent,
            children: Vec::new(),
            done: AtomicBool::new(false),
            queued: AtomicBool::new(false),
        }
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    /// Human-readable identifier, used only for diagnostics.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Back-reference to the owning parent, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child node ids, in insertion order; empty for leaves.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether this node's computation has finished.
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }

    /// Publish completion of this node's computation.
    ///
    /// Called exactly once, by the worker that executed the node; the gate
    /// guarantees a node is dequeued (and therefore executed) at most once.
    pub(crate) fn mark_done(&self) {
        let was_done = self.done.swap(true, Ordering::Release);
        debug_assert!(!was_done, "node {:?} marked done twice", self.label);
    }

    /// Whether this node has ever been handed to the work queue.
    pub fn is_queued(&self) -> bool {
        self.queued.load(Ordering::Acquire)
    }

    /// Atomically claim the right to enqueue this node.
    ///
    /// Returns `true` for exactly one caller over the node's lifetime; the
    /// flag is never reset.
    pub(crate) fn claim_enqueue(&self) -> bool {
        self.queued
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}
