// src/config/validate.rs

use anyhow::{Result, anyhow};

use crate::config::model::ConfigFile;

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - `idle_threshold >= 1` and `idle_delay_ms >= 1` (a zero threshold
///   would terminate the dispatcher before its first real drain)
/// - `depth >= 1` and `max_children >= 1`
/// - `min_ms <= max_ms`
///
/// `workers == 0` is valid and means "use all available parallelism".
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    validate_run(cfg)?;
    validate_tree(cfg)?;
    validate_work(cfg)?;
    Ok(())
}

fn validate_run(cfg: &ConfigFile) -> Result<()> {
    if cfg.run.idle_threshold == 0 {
        return Err(anyhow!("[run].idle_threshold must be >= 1 (got 0)"));
    }
    if cfg.run.idle_delay_ms == 0 {
        return Err(anyhow!("[run].idle_delay_ms must be >= 1 (got 0)"));
    }
    Ok(())
}

fn validate_tree(cfg: &ConfigFile) -> Result<()> {
    if cfg.tree.depth == 0 {
        return Err(anyhow!("[tree].depth must be >= 1 (got 0)"));
    }
    if cfg.tree.max_children == 0 {
        return Err(anyhow!("[tree].max_children must be >= 1 (got 0)"));
    }
    Ok(())
}

fn validate_work(cfg: &ConfigFile) -> Result<()> {
    if cfg.work.min_ms > cfg.work.max_ms {
        return Err(anyhow!(
            "[work].min_ms ({}) must not exceed [work].max_ms ({})",
            cfg.work.min_ms,
            cfg.work.max_ms
        ));
    }
    Ok(())
}
