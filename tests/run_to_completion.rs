use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use leafwise::config::TreeSection;
use leafwise::sched::{Dispatcher, DispatcherOptions, WorkOutcome, WorkUnit, Workload};
use leafwise::sim;
use leafwise::tree::Tree;

/// Workload that counts executions per node and checks the causal
/// ordering guarantee: every child must be observably done by the time
/// its parent's computation starts.
struct CountingWorkload {
    tree: Arc<Tree>,
    counts: Arc<Vec<AtomicU32>>,
    not_ready_starts: Arc<AtomicU32>,
}

impl CountingWorkload {
    fn new(tree: Arc<Tree>) -> Self {
        let counts = Arc::new((0..tree.len()).map(|_| AtomicU32::new(0)).collect());
        Self {
            tree,
            counts,
            not_ready_starts: Arc::new(AtomicU32::new(0)),
        }
    }
}

impl Workload for CountingWorkload {
    fn compute(&self, unit: WorkUnit<'_>) -> WorkOutcome {
        if !self.tree.is_ready(unit.id) {
            self.not_ready_starts.fetch_add(1, Ordering::Relaxed);
        }
        self.counts[unit.id].fetch_add(1, Ordering::Relaxed);
        WorkOutcome::Done
    }
}

#[tokio::test]
async fn every_node_computes_exactly_once() {
    let cfg = TreeSection {
        depth: 4,
        max_children: 3,
        seed: Some(7),
    };
    let tree = Arc::new(sim::generate(&cfg));
    let total = tree.len();
    assert!(total > 1, "seeded tree should have more than the root");

    let workload = CountingWorkload::new(Arc::clone(&tree));
    let counts = Arc::clone(&workload.counts);
    let opts = DispatcherOptions {
        workers: 4,
        idle_threshold: 5,
        idle_delay: Duration::from_millis(2),
    };

    let dispatcher = Dispatcher::new(Arc::clone(&tree), workload, opts);
    dispatcher.seed();
    let summary = dispatcher.run().await;

    assert!(summary.is_complete(), "undone: {:?}", summary.undone);
    assert_eq!(summary.total_nodes, total);
    assert_eq!(summary.completed, total);
    for id in tree.ids() {
        assert!(tree.node(id).is_done());
        assert!(tree.node(id).is_queued());
        assert_eq!(counts[id].load(Ordering::Relaxed), 1, "node {id} count");
    }

    // Per-worker item counts must add up to one execution per node.
    let executed: u64 = summary.workers.iter().map(|w| w.items).sum();
    assert_eq!(executed, total as u64);
}

#[tokio::test]
async fn parents_never_start_before_their_children_finish() {
    let cfg = TreeSection {
        depth: 5,
        max_children: 2,
        seed: Some(42),
    };
    let tree = Arc::new(sim::generate(&cfg));

    let workload = CountingWorkload::new(Arc::clone(&tree));
    let not_ready_starts = Arc::clone(&workload.not_ready_starts);
    let opts = DispatcherOptions {
        workers: 8,
        idle_threshold: 5,
        idle_delay: Duration::from_millis(2),
    };

    let dispatcher = Dispatcher::new(Arc::clone(&tree), workload, opts);
    dispatcher.seed();
    let summary = dispatcher.run().await;

    assert!(summary.is_complete(), "undone: {:?}", summary.undone);
    assert_eq!(not_ready_starts.load(Ordering::Relaxed), 0);
}
