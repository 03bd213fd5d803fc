// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! Most of the crate uses `anyhow` directly; the one failure callers need
//! to match on structurally gets its own type below.

use thiserror::Error;

pub use anyhow::{Error, Result};

/// The dispatcher's idle-streak termination fired while some nodes had
/// never completed.
///
/// This is how "terminated while incomplete" is kept distinct from "queue
/// drained and stayed empty": a clean run returns `Ok`, an incomplete one
/// returns this error carrying the labels of every unfinished node.
#[derive(Error, Debug)]
#[error("scheduler went idle with {} unfinished node(s): {}", undone.len(), undone.join(", "))]
pub struct StarvationError {
    /// Labels of the nodes whose `done` flag was still unset at shutdown.
    pub undone: Vec<String>,
}

/// The run was cut short by a shutdown request before every node had
/// finished.
///
/// Kept separate from [`StarvationError`]: a cancelled run did not go
/// idle, and the caller may want to treat "user stopped it" differently
/// from "the queue dried up with work outstanding".
#[derive(Error, Debug)]
#[error("run interrupted with {} unfinished node(s): {}", undone.len(), undone.join(", "))]
pub struct InterruptedError {
    /// Labels of the nodes whose `done` flag was still unset at shutdown.
    pub undone: Vec<String>,
}
