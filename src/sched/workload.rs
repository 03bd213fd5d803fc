// src/sched/workload.rs

use crate::tree::NodeId;

/// One unit of work handed to a [`Workload`].
#[derive(Debug, Clone, Copy)]
pub struct WorkUnit<'a> {
    /// Id of the node being computed.
    pub id: NodeId,
    /// The node's diagnostic label.
    pub label: &'a str,
    /// Opaque identifier of the worker slot executing this unit, supplied
    /// by the dispatcher. Only meaningful for reporting.
    pub worker: usize,
}

/// Outcome of one node's computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkOutcome {
    /// The computation finished; the node will be marked done and its
    /// parent re-checked for readiness.
    Done,
    /// The computation never reached completion (a simulated hang or a
    /// host-side failure the host chose not to count). The node's `done`
    /// flag stays unset, its parent can never become ready, and the run
    /// eventually ends via idle termination, reporting the stalled
    /// subtree.
    Stalled,
}

/// The per-node computation seam.
///
/// Implementations run on blocking worker tasks and may freely sleep or
/// do CPU work; every unit in a batch may execute concurrently with every
/// other. A unit must not touch scheduling state — the dispatcher handles
/// the `done` transition and the parent readiness check itself.
pub trait Workload: Send + Sync + 'static {
    fn compute(&self, unit: WorkUnit<'_>) -> WorkOutcome;
}
