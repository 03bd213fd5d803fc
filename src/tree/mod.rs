// src/tree/mod.rs

//! Tree representation for bottom-up scheduling.
//!
//! - [`node`] holds a single vertex and its two monotonic atomic flags.
//! - [`arena`] owns all nodes in an index arena; parent links are plain
//!   indices into the arena, so there is a single ownership claim per node.

pub mod arena;
pub mod node;

pub use arena::Tree;
pub use node::{Node, NodeId};
