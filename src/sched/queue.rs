// src/sched/queue.rs

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::tree::NodeId;

/// Unbounded multi-producer/multi-consumer bag of ready node ids.
///
/// There is no ordering guarantee between pending nodes; the scheduler
/// does not need one. A coarse lock around a `Vec` keeps `drain_all`
/// atomic: a node pushed concurrently with a drain lands either in that
/// drain or in the next one, but is never lost or duplicated.
#[derive(Debug, Default)]
pub struct WorkQueue {
    ready: Mutex<Vec<NodeId>>,
}

impl WorkQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ready node. Callers go through the readiness gate, which
    /// guarantees each node is pushed at most once.
    pub fn push(&self, id: NodeId) {
        self.locked().push(id);
    }

    /// Atomically remove and return every node currently present.
    ///
    /// An empty result is a normal outcome, not an error.
    pub fn drain_all(&self) -> Vec<NodeId> {
        std::mem::take(&mut *self.locked())
    }

    pub fn is_empty(&self) -> bool {
        self.locked().is_empty()
    }

    // A poisoned lock only means some worker panicked mid-push; the Vec
    // itself is still structurally sound, so keep going.
    fn locked(&self) -> MutexGuard<'_, Vec<NodeId>> {
        self.ready.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
