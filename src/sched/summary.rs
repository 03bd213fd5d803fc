// src/sched/summary.rs

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::errors::{InterruptedError, StarvationError};

/// Per-worker accumulators, updated from many threads with atomic
/// increments (never an unsynchronized shared counter).
#[derive(Debug)]
pub(crate) struct WorkerStats {
    slots: Vec<WorkerSlot>,
}

#[derive(Debug, Default)]
struct WorkerSlot {
    items: AtomicU64,
    busy_nanos: AtomicU64,
}

impl WorkerStats {
    pub(crate) fn new(workers: usize) -> Self {
        Self {
            slots: (0..workers).map(|_| WorkerSlot::default()).collect(),
        }
    }

    pub(crate) fn record(&self, worker: usize, busy: Duration) {
        let slot = &self.slots[worker];
        slot.items.fetch_add(1, Ordering::Relaxed);
        slot.busy_nanos
            .fetch_add(busy.as_nanos() as u64, Ordering::Relaxed);
    }

    pub(crate) fn reports(&self) -> Vec<WorkerReport> {
        self.slots
            .iter()
            .enumerate()
            .map(|(worker, slot)| WorkerReport {
                worker,
                items: slot.items.load(Ordering::Relaxed),
                busy: Duration::from_nanos(slot.busy_nanos.load(Ordering::Relaxed)),
            })
            .collect()
    }
}

/// What one worker slot did over the whole run.
#[derive(Debug, Clone)]
pub struct WorkerReport {
    pub worker: usize,
    /// Number of units this slot executed.
    pub items: u64,
    /// Cumulative time spent inside `Workload::compute`.
    pub busy: Duration,
}

/// Aggregate statistics returned by [`Dispatcher::run`](crate::sched::Dispatcher::run).
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Total number of nodes in the tree.
    pub total_nodes: usize,
    /// Nodes whose computation finished.
    pub completed: usize,
    /// Labels of nodes that never finished; empty on a clean run.
    pub undone: Vec<String>,
    /// Per-worker item counts and busy time.
    pub workers: Vec<WorkerReport>,
    /// Wall-clock duration of the dispatcher loop.
    pub elapsed: Duration,
    /// True when the run was cut short by a shutdown request rather than
    /// by idle termination.
    pub interrupted: bool,
}

impl RunSummary {
    /// Whether every node in the tree completed.
    pub fn is_complete(&self) -> bool {
        self.undone.is_empty()
    }

    /// Convert the run outcome into a result, keeping the termination
    /// conditions distinguishable: a clean run is `Ok`, a cancelled run
    /// with work outstanding is [`InterruptedError`], and idle
    /// termination with work outstanding is [`StarvationError`].
    pub fn into_result(self) -> anyhow::Result<()> {
        if self.is_complete() {
            return Ok(());
        }
        if self.interrupted {
            return Err(InterruptedError {
                undone: self.undone,
            }
            .into());
        }
        Err(StarvationError {
            undone: self.undone,
        }
        .into())
    }
}
