// src/tree/arena.rs

use std::fmt::Write as _;

use crate::tree::node::{Node, NodeId};

/// Index-arena tree: the arena owns every node top-down, and all links
/// (parent and children) are indices into the arena.
///
/// The node at index `0` is always the root. The shape is fixed once
/// construction is done; during a run only the per-node atomic flags
/// change, so a `Tree` behind an `Arc` can be read from any number of
/// worker threads without further synchronization.
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Create a tree containing just the root.
    pub fn with_root(label: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node::new(label.into(), None)],
        }
    }

    /// Append a new child under `parent` and return its id.
    ///
    /// # Panics
    /// If `parent` is not a valid id in this tree.
    pub fn add_child(&mut self, parent: NodeId, label: impl Into<String>) -> NodeId {
        assert!(parent < self.nodes.len(), "unknown parent node {parent}");
        let id = self.nodes.len();
        self.nodes.push(Node::new(label.into(), Some(parent)));
        self.nodes[parent].push_child(id);
        id
    }

    /// Id of the root node.
    pub fn root(&self) -> NodeId {
        0
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all node ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        0..self.nodes.len()
    }

    /// Number of leaves, for reporting.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Readiness predicate: a node may run once every child has published
    /// `done` (vacuously true for leaves).
    ///
    /// This reads each child's flag without any lock. A caller may observe
    /// a false negative while a sibling's store is in flight; that is fine,
    /// because every sibling re-checks after publishing its own flag, so
    /// the last one to finish is guaranteed to see all flags set.
    pub fn is_ready(&self, id: NodeId) -> bool {
        self.nodes[id]
            .children()
            .iter()
            .all(|&child| self.nodes[child].is_done())
    }

    /// Count of nodes whose computation has finished.
    pub fn done_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_done()).count()
    }

    /// Labels of every node that has not finished, in insertion order.
    pub fn undone_labels(&self) -> Vec<String> {
        self.nodes
            .iter()
            .filter(|n| !n.is_done())
            .map(|n| n.label().to_string())
            .collect()
    }

    /// Indented listing of the tree shape, used by `--dry-run`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(self.root(), 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id];
            let _ = writeln!(out, "{}- {}", "  ".repeat(depth), node.label());
            for &child in node.children().iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        out
    }
}
