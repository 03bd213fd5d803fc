// src/sim/tree_gen.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::TreeSection;
use crate::tree::Tree;

/// Generate a random tree from the `[tree]` config section.
///
/// The root is labelled `r` and children append their index to the parent
/// label (`r.0`, `r.0.1`, ...), so a label doubles as the path from the
/// root. Every internal node gets between 1 and `max_children` children;
/// nodes at the configured depth are leaves. With a fixed seed the shape
/// is reproducible across runs.
pub fn generate(cfg: &TreeSection) -> Tree {
    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut tree = Tree::with_root("r");
    // (node, remaining levels below it)
    let mut stack = vec![(tree.root(), cfg.depth.saturating_sub(1))];
    while let Some((parent, levels_left)) = stack.pop() {
        if levels_left == 0 {
            continue;
        }
        let fanout = rng.gen_range(1..=cfg.max_children);
        for i in 0..fanout {
            let label = format!("{}.{}", tree.node(parent).label(), i);
            let child = tree.add_child(parent, label);
            stack.push((child, levels_left - 1));
        }
    }

    debug!(
        nodes = tree.len(),
        leaves = tree.leaf_count(),
        depth = cfg.depth,
        "generated random tree"
    );
    tree
}
