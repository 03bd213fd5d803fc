// src/sim/mod.rs

//! Reference hosts for the scheduler's pluggable seams.
//!
//! The core only needs a tree and a [`Workload`](crate::sched::Workload);
//! this module supplies both for the CLI: a seeded random tree generator
//! and a workload that simulates computation by sleeping.

pub mod tree_gen;
pub mod workload;

pub use tree_gen::generate;
pub use workload::SimWorkload;
