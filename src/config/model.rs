// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [run]
/// workers = 4
/// idle_threshold = 10
/// idle_delay_ms = 50
///
/// [tree]
/// depth = 4
/// max_children = 3
/// seed = 42
///
/// [work]
/// min_ms = 1
/// max_ms = 25
/// ```
///
/// All sections are optional and have reasonable defaults, so an empty
/// file (or no file at all) is a valid configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Dispatcher behaviour from `[run]`.
    #[serde(default)]
    pub run: RunSection,

    /// Shape of the generated tree from `[tree]`.
    #[serde(default)]
    pub tree: TreeSection,

    /// Simulated per-node computation from `[work]`.
    #[serde(default)]
    pub work: WorkSection,
}

/// `[run]` section: worker pool size and idle-termination tuning.
#[derive(Debug, Clone, Deserialize)]
pub struct RunSection {
    /// Number of parallel workers executing a batch.
    ///
    /// `0` (the default) means "use all available parallelism".
    #[serde(default)]
    pub workers: usize,

    /// Number of consecutive empty queue drains before the dispatcher
    /// declares the run finished.
    #[serde(default = "default_idle_threshold")]
    pub idle_threshold: u32,

    /// Delay between empty drains, in milliseconds.
    #[serde(default = "default_idle_delay_ms")]
    pub idle_delay_ms: u64,
}

fn default_idle_threshold() -> u32 {
    10
}

fn default_idle_delay_ms() -> u64 {
    50
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            workers: 0,
            idle_threshold: default_idle_threshold(),
            idle_delay_ms: default_idle_delay_ms(),
        }
    }
}

impl RunSection {
    /// Effective worker count: the configured value, or all available
    /// parallelism when set to `0`.
    pub fn effective_workers(&self) -> usize {
        if self.workers > 0 {
            return self.workers;
        }
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }
}

/// `[tree]` section: parameters for the random tree generator.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeSection {
    /// Number of levels in the generated tree (1 = just the root).
    #[serde(default = "default_depth")]
    pub depth: u32,

    /// Maximum children per internal node; each internal node gets
    /// between 1 and this many children.
    #[serde(default = "default_max_children")]
    pub max_children: u32,

    /// Optional RNG seed; when omitted, each run generates a fresh tree.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_depth() -> u32 {
    4
}

fn default_max_children() -> u32 {
    3
}

impl Default for TreeSection {
    fn default() -> Self {
        Self {
            depth: default_depth(),
            max_children: default_max_children(),
            seed: None,
        }
    }
}

/// `[work]` section: window for the simulated per-node busy time.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkSection {
    /// Minimum simulated computation time, in milliseconds.
    #[serde(default = "default_min_ms")]
    pub min_ms: u64,

    /// Maximum simulated computation time, in milliseconds.
    #[serde(default = "default_max_ms")]
    pub max_ms: u64,
}

fn default_min_ms() -> u64 {
    1
}

fn default_max_ms() -> u64 {
    25
}

impl Default for WorkSection {
    fn default() -> Self {
        Self {
            min_ms: default_min_ms(),
            max_ms: default_max_ms(),
        }
    }
}
