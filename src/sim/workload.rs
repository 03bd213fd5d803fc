// src/sim/workload.rs

use std::time::Duration;

use rand::Rng;
use tracing::trace;

use crate::config::WorkSection;
use crate::sched::{WorkOutcome, WorkUnit, Workload};

/// Reference workload: simulate a computation by sleeping for a uniformly
/// random duration inside the configured `[work]` window.
#[derive(Debug, Clone)]
pub struct SimWorkload {
    min: Duration,
    max: Duration,
}

impl SimWorkload {
    pub fn from_config(cfg: &WorkSection) -> Self {
        Self {
            min: Duration::from_millis(cfg.min_ms),
            max: Duration::from_millis(cfg.max_ms),
        }
    }
}

impl Workload for SimWorkload {
    fn compute(&self, unit: WorkUnit<'_>) -> WorkOutcome {
        let busy = if self.max > self.min {
            self.min + Duration::from_nanos(rand::thread_rng().gen_range(
                0..=(self.max - self.min).as_nanos() as u64,
            ))
        } else {
            self.min
        };
        std::thread::sleep(busy);
        trace!(
            node = %unit.label,
            worker = unit.worker,
            busy_us = busy.as_micros() as u64,
            "simulated computation"
        );
        WorkOutcome::Done
    }
}
