use std::sync::Arc;
use std::time::Duration;

use leafwise::errors::InterruptedError;
use leafwise::sched::{Dispatcher, DispatcherOptions, WorkOutcome, WorkUnit, Workload};
use leafwise::tree::Tree;

/// Workload slow enough that a shutdown request lands while the first
/// batch is still executing.
struct SlowWorkload {
    busy: Duration,
}

impl Workload for SlowWorkload {
    fn compute(&self, _unit: WorkUnit<'_>) -> WorkOutcome {
        std::thread::sleep(self.busy);
        WorkOutcome::Done
    }
}

#[tokio::test]
async fn shutdown_finishes_the_batch_and_reports_interrupted() {
    let mut tree = Tree::with_root("r");
    for i in 0..4 {
        tree.add_child(tree.root(), format!("r.{i}"));
    }
    let tree = Arc::new(tree);

    let opts = DispatcherOptions {
        workers: 1,
        idle_threshold: 10,
        idle_delay: Duration::from_millis(10),
    };
    let dispatcher = Dispatcher::new(
        Arc::clone(&tree),
        SlowWorkload {
            busy: Duration::from_millis(50),
        },
        opts,
    );

    // Request shutdown while the leaf batch is still being worked
    // through (4 units x 50ms on a single worker).
    let shutdown = dispatcher.shutdown_handle();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        shutdown.store(true, std::sync::atomic::Ordering::Relaxed);
    });

    dispatcher.seed();
    let summary = dispatcher.run().await;

    // The in-flight batch ran to completion, so every leaf finished and
    // the root was even gated into the queue by its last child...
    assert!(summary.interrupted);
    assert_eq!(summary.completed, 4);
    for id in tree.ids().skip(1) {
        assert!(tree.node(id).is_done());
    }
    assert!(tree.node(tree.root()).is_queued());

    // ...but the dispatcher returned before draining it.
    assert!(!tree.node(tree.root()).is_done());
    assert_eq!(summary.undone, vec!["r".to_string()]);

    // An interrupted run must not be reported as starvation.
    let err = summary.into_result().expect_err("run was incomplete");
    let interrupted = err
        .downcast_ref::<InterruptedError>()
        .expect("expected InterruptedError");
    assert_eq!(interrupted.undone, vec!["r".to_string()]);
    let msg = err.to_string();
    assert!(msg.contains("interrupted"), "unexpected message: {msg}");
    assert!(!msg.contains("went idle"), "unexpected message: {msg}");
}

#[tokio::test]
async fn shutdown_after_completion_is_still_a_clean_run() {
    let mut tree = Tree::with_root("r");
    tree.add_child(tree.root(), "r.0");
    let tree = Arc::new(tree);

    let opts = DispatcherOptions {
        workers: 1,
        idle_threshold: 50,
        idle_delay: Duration::from_millis(5),
    };
    let dispatcher = Dispatcher::new(
        Arc::clone(&tree),
        SlowWorkload {
            busy: Duration::from_millis(1),
        },
        opts,
    );

    // Everything finishes long before the flag flips; the dispatcher
    // then notices the request during an idle poll and returns early,
    // but the run itself is complete.
    let shutdown = dispatcher.shutdown_handle();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(40)).await;
        shutdown.store(true, std::sync::atomic::Ordering::Relaxed);
    });

    dispatcher.seed();
    let summary = dispatcher.run().await;

    assert!(summary.is_complete());
    assert_eq!(summary.completed, 2);
    summary.into_result().expect("complete run should be Ok");
}
