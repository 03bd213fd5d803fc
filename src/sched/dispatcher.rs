// src/sched/dispatcher.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::sched::gate::{EnqueueOutcome, ReadinessGate};
use crate::sched::queue::WorkQueue;
use crate::sched::seed::seed_leaves;
use crate::sched::summary::{RunSummary, WorkerStats};
use crate::sched::workload::{WorkOutcome, WorkUnit, Workload};
use crate::tree::{NodeId, Tree};

/// Tuning knobs for the dispatcher loop.
#[derive(Debug, Clone)]
pub struct DispatcherOptions {
    /// Number of units executed concurrently within a batch.
    pub workers: usize,
    /// Consecutive empty drains before the run is declared finished.
    pub idle_threshold: u32,
    /// Sleep between empty drains.
    pub idle_delay: Duration,
}

impl Default for DispatcherOptions {
    fn default() -> Self {
        Self {
            workers: 1,
            idle_threshold: 10,
            idle_delay: Duration::from_millis(50),
        }
    }
}

/// The worker loop: repeatedly drains the queue into a batch, executes the
/// batch in parallel, and per completed unit re-evaluates the unit's parent
/// for readiness.
///
/// There is no central coordinator deciding order — eligibility is detected
/// cooperatively by the finishing workers themselves. The loop itself only
/// alternates between two states: draining (collect a batch) and executing
/// (run it, join every member, propagate readiness). Termination is the
/// idle-streak heuristic: after `idle_threshold` consecutive empty drains
/// spaced `idle_delay` apart, control returns to the caller. The summary
/// always carries the labels of any unfinished nodes, so an incomplete run
/// cannot pass for a clean one.
#[derive(Debug)]
pub struct Dispatcher<W: Workload> {
    tree: Arc<Tree>,
    queue: Arc<WorkQueue>,
    gate: ReadinessGate,
    workload: Arc<W>,
    opts: DispatcherOptions,
    stats: Arc<WorkerStats>,
    shutdown: Arc<AtomicBool>,
}

impl<W: Workload> Dispatcher<W> {
    pub fn new(tree: Arc<Tree>, workload: W, opts: DispatcherOptions) -> Self {
        let queue = Arc::new(WorkQueue::new());
        let gate = ReadinessGate::new(Arc::clone(&tree), Arc::clone(&queue));
        let stats = Arc::new(WorkerStats::new(opts.workers.max(1)));
        Self {
            tree,
            queue,
            gate,
            workload: Arc::new(workload),
            opts,
            stats,
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag checked between drains and honoured before starting a new
    /// batch; setting it makes the dispatcher return early with
    /// `interrupted = true` in the summary.
    pub fn shutdown_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    /// Seed the queue with every leaf. May run before or concurrently with
    /// [`run`](Self::run); the gate makes double seeding harmless.
    pub fn seed(&self) {
        seed_leaves(&self.tree, &self.gate);
    }

    /// Drive the run to termination and return aggregate statistics.
    pub async fn run(self) -> RunSummary {
        let started = Instant::now();
        let workers = self.opts.workers.max(1);
        let mut idle_streak = 0u32;
        let mut interrupted = false;

        info!(
            workers,
            nodes = self.tree.len(),
            idle_threshold = self.opts.idle_threshold,
            "dispatcher started"
        );

        loop {
            if self.shutdown.load(Ordering::Relaxed) {
                info!("shutdown requested; stopping dispatcher");
                interrupted = true;
                break;
            }

            let batch = self.queue.drain_all();
            if batch.is_empty() {
                idle_streak += 1;
                if idle_streak >= self.opts.idle_threshold {
                    debug!(idle_streak, "idle threshold reached; dispatcher terminating");
                    break;
                }
                tokio::time::sleep(self.opts.idle_delay).await;
                continue;
            }

            idle_streak = 0;
            debug!(batch = batch.len(), "executing batch");

            // Waves of at most `workers` units. Every wave is joined in
            // full, so the whole batch has finished (and run its parent
            // readiness checks) before the next drain.
            for wave in batch.chunks(workers) {
                let mut join = JoinSet::new();
                for (worker, &id) in wave.iter().enumerate() {
                    let tree = Arc::clone(&self.tree);
                    let gate = self.gate.clone();
                    let workload = Arc::clone(&self.workload);
                    let stats = Arc::clone(&self.stats);
                    join.spawn_blocking(move || {
                        execute_unit(&tree, &gate, workload.as_ref(), &stats, id, worker);
                    });
                }
                while let Some(res) = join.join_next().await {
                    if let Err(err) = res {
                        // One unit panicking must not take down its
                        // siblings or the dispatcher.
                        error!(error = %err, "worker task failed");
                    }
                }
            }
        }

        let summary = RunSummary {
            total_nodes: self.tree.len(),
            completed: self.tree.done_count(),
            undone: self.tree.undone_labels(),
            workers: self.stats.reports(),
            elapsed: started.elapsed(),
            interrupted,
        };
        info!(
            completed = summary.completed,
            total = summary.total_nodes,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "dispatcher finished"
        );
        summary
    }
}

/// Execute one unit on a blocking worker: run the computation, publish
/// `done`, then re-check the parent's readiness and gate it in if this was
/// the last outstanding child.
fn execute_unit<W: Workload>(
    tree: &Tree,
    gate: &ReadinessGate,
    workload: &W,
    stats: &WorkerStats,
    id: NodeId,
    worker: usize,
) {
    let node = tree.node(id);
    let started = Instant::now();
    let outcome = workload.compute(WorkUnit {
        id,
        label: node.label(),
        worker,
    });
    let busy = started.elapsed();
    stats.record(worker, busy);

    if outcome == WorkOutcome::Stalled {
        warn!(node = %node.label(), "computation did not report completion");
        return;
    }

    node.mark_done();
    debug!(
        node = %node.label(),
        worker,
        busy_us = busy.as_micros() as u64,
        "node computation finished"
    );

    let Some(parent) = node.parent() else {
        info!(node = %node.label(), "root completed");
        return;
    };

    if tree.is_ready(parent) {
        if let EnqueueOutcome::Enqueued = gate.try_enqueue(parent) {
            debug!(
                parent = %tree.node(parent).label(),
                "last child finished; parent is ready"
            );
        }
    }
}
