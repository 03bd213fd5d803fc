// src/sched/mod.rs

//! Bottom-up scheduling core.
//!
//! This module ties together:
//! - the work queue of ready nodes
//! - the readiness gate (single-enqueue latch per node)
//! - leaf seeding (the initial depth-first walk)
//! - the dispatcher loop that drains batches, executes them in parallel
//!   and propagates completion upward
//! - run statistics

pub mod dispatcher;
pub mod gate;
pub mod queue;
pub mod seed;
pub mod summary;
pub mod workload;

pub use dispatcher::{Dispatcher, DispatcherOptions};
pub use gate::{EnqueueOutcome, ReadinessGate};
pub use queue::WorkQueue;
pub use seed::seed_leaves;
pub use summary::{RunSummary, WorkerReport};
pub use workload::{WorkOutcome, WorkUnit, Workload};
