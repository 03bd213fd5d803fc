// src/sched/seed.rs

use tracing::debug;

use crate::sched::gate::ReadinessGate;
use crate::tree::Tree;

/// Seed the work queue with every leaf of the tree.
///
/// Depth-first walk with an explicit stack (no call-depth limit on deep
/// trees): internal nodes are only recursed into, never enqueued — they
/// become ready reactively, when their last child finishes. Leaves go
/// through the same readiness gate as everything else.
pub fn seed_leaves(tree: &Tree, gate: &ReadinessGate) {
    let mut seeded = 0usize;
    let mut stack = vec![tree.root()];
    while let Some(id) = stack.pop() {
        let node = tree.node(id);
        if node.is_leaf() {
            gate.try_enqueue(id);
            seeded += 1;
        } else {
            stack.extend(node.children().iter().copied());
        }
    }
    debug!(leaves = seeded, "seeded all leaves into the work queue");
}
