// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `leafwise`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "leafwise",
    version,
    about = "Run a tree of computations bottom-up, leaves first.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Leafwise.toml` in the current working directory. If the
    /// file does not exist, built-in defaults are used instead.
    #[arg(
        long,
        value_name = "PATH",
        default_value_os_t = crate::config::loader::default_config_path()
    )]
    pub config: PathBuf,

    /// Number of parallel workers (overrides `[run].workers`).
    ///
    /// `0` means "use all available parallelism".
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Seed for the random tree generator (overrides `[tree].seed`).
    ///
    /// Runs with the same seed and config produce the same tree shape.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `LEAFWISE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate config, print the generated tree, but run nothing.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
