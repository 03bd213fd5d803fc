// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod sched;
pub mod sim;
pub mod tree;

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::cli::CliArgs;
use crate::config::ConfigFile;
use crate::config::loader::load_or_default;
use crate::sched::{Dispatcher, DispatcherOptions, RunSummary};
use crate::sim::SimWorkload;
use crate::tree::Tree;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (with CLI overrides)
/// - tree generation
/// - the dispatcher and its workload
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let mut cfg = load_or_default(&args.config)?;
    apply_overrides(&mut cfg, &args);

    let tree = sim::generate(&cfg.tree);

    if args.dry_run {
        print_dry_run(&cfg, &tree);
        return Ok(());
    }

    let opts = DispatcherOptions {
        workers: cfg.run.effective_workers(),
        idle_threshold: cfg.run.idle_threshold,
        idle_delay: Duration::from_millis(cfg.run.idle_delay_ms),
    };

    info!(
        nodes = tree.len(),
        leaves = tree.leaf_count(),
        workers = opts.workers,
        "starting bottom-up run"
    );

    let workload = SimWorkload::from_config(&cfg.work);
    let dispatcher = Dispatcher::new(Arc::new(tree), workload, opts);

    // Ctrl-C → graceful shutdown: the dispatcher checks this flag between
    // drains and finishes the in-flight batch before returning.
    {
        let shutdown = dispatcher.shutdown_handle();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            shutdown.store(true, Ordering::Relaxed);
        });
    }

    dispatcher.seed();
    let summary = dispatcher.run().await;
    print_summary(&summary);

    summary.into_result()
}

fn apply_overrides(cfg: &mut ConfigFile, args: &CliArgs) {
    if let Some(workers) = args.workers {
        cfg.run.workers = workers;
    }
    if let Some(seed) = args.seed {
        cfg.tree.seed = Some(seed);
    }
}

/// Simple dry-run output: print effective settings and the generated tree.
fn print_dry_run(cfg: &ConfigFile, tree: &Tree) {
    println!("leafwise dry-run");
    println!("  run.workers = {}", cfg.run.effective_workers());
    println!("  run.idle_threshold = {}", cfg.run.idle_threshold);
    println!("  run.idle_delay_ms = {}", cfg.run.idle_delay_ms);
    println!("  tree.depth = {}", cfg.tree.depth);
    println!("  tree.max_children = {}", cfg.tree.max_children);
    if let Some(seed) = cfg.tree.seed {
        println!("  tree.seed = {seed}");
    }
    println!("  work.min_ms = {}", cfg.work.min_ms);
    println!("  work.max_ms = {}", cfg.work.max_ms);
    println!();
    println!(
        "tree ({} nodes, {} leaves):",
        tree.len(),
        tree.leaf_count()
    );
    print!("{}", tree.render());
}

fn print_summary(summary: &RunSummary) {
    println!(
        "completed {}/{} nodes in {:?}{}",
        summary.completed,
        summary.total_nodes,
        summary.elapsed,
        if summary.interrupted {
            " (interrupted)"
        } else {
            ""
        }
    );
    for report in &summary.workers {
        println!(
            "  worker {}: {} items, {:?} busy",
            report.worker, report.items, report.busy
        );
    }
    if !summary.undone.is_empty() {
        println!("  unfinished: {}", summary.undone.join(", "));
    }
}
