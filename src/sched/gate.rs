// src/sched/gate.rs

use std::sync::Arc;

use tracing::debug;

use crate::sched::queue::WorkQueue;
use crate::tree::{NodeId, Tree};

/// Result of [`ReadinessGate::try_enqueue`].
///
/// `AlreadyQueued` is an expected race outcome, not a fault: when several
/// children of the same parent finish at (near) the same instant, each
/// independently observes "all siblings done" and attempts the enqueue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnqueueOutcome {
    /// This call won the claim and pushed the node onto the queue.
    Enqueued,
    /// The node had already been handed to the queue; this call was a no-op.
    AlreadyQueued,
}

/// Per-node atomic latch between "this node might be ready" and "this node
/// is in the work queue".
///
/// The claim is a single compare-and-set on the node's `queued` flag, so an
/// unbounded number of concurrent callers can race on the same node and the
/// node still appears in the queue exactly once. Without this latch, two
/// sibling completions observing each other's `done` flags would both push
/// the parent, and the parent would be computed twice.
#[derive(Debug, Clone)]
pub struct ReadinessGate {
    tree: Arc<Tree>,
    queue: Arc<WorkQueue>,
}

impl ReadinessGate {
    pub fn new(tree: Arc<Tree>, queue: Arc<WorkQueue>) -> Self {
        Self { tree, queue }
    }

    /// Atomically test-and-set the node's queued flag; push the node onto
    /// the work queue iff this call performed the false→true transition.
    pub fn try_enqueue(&self, id: NodeId) -> EnqueueOutcome {
        let node = self.tree.node(id);
        if node.claim_enqueue() {
            self.queue.push(id);
            debug!(node = %node.label(), "node enqueued");
            EnqueueOutcome::Enqueued
        } else {
            debug!(node = %node.label(), "node already queued; ignoring");
            EnqueueOutcome::AlreadyQueued
        }
    }
}
