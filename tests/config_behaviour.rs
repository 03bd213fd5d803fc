use std::error::Error;
use std::fs;

use leafwise::config::{ConfigFile, load_and_validate, load_or_default, validate_config};
use leafwise::config::loader::default_config_path;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn missing_file_falls_back_to_defaults() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Leafwise.toml");

    let cfg = load_or_default(&path)?;
    assert_eq!(cfg.run.workers, 0);
    assert_eq!(cfg.run.idle_threshold, 10);
    assert_eq!(cfg.run.idle_delay_ms, 50);
    assert_eq!(cfg.tree.depth, 4);
    assert_eq!(cfg.tree.max_children, 3);
    assert_eq!(cfg.tree.seed, None);
    assert_eq!(cfg.work.min_ms, 1);
    assert_eq!(cfg.work.max_ms, 25);
    Ok(())
}

#[test]
fn full_file_parses_and_validates() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Leafwise.toml");
    fs::write(
        &path,
        r#"
[run]
workers = 3
idle_threshold = 5
idle_delay_ms = 20

[tree]
depth = 6
max_children = 2
seed = 99

[work]
min_ms = 2
max_ms = 8
"#,
    )?;

    let cfg = load_and_validate(&path)?;
    assert_eq!(cfg.run.workers, 3);
    assert_eq!(cfg.run.effective_workers(), 3);
    assert_eq!(cfg.run.idle_threshold, 5);
    assert_eq!(cfg.run.idle_delay_ms, 20);
    assert_eq!(cfg.tree.depth, 6);
    assert_eq!(cfg.tree.max_children, 2);
    assert_eq!(cfg.tree.seed, Some(99));
    assert_eq!(cfg.work.min_ms, 2);
    assert_eq!(cfg.work.max_ms, 8);
    Ok(())
}

#[test]
fn partial_file_keeps_defaults_for_the_rest() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Leafwise.toml");
    fs::write(&path, "[tree]\ndepth = 2\n")?;

    let cfg = load_and_validate(&path)?;
    assert_eq!(cfg.tree.depth, 2);
    assert_eq!(cfg.tree.max_children, 3);
    assert_eq!(cfg.run.idle_threshold, 10);
    Ok(())
}

#[test]
fn default_config_path_is_project_local() {
    assert_eq!(default_config_path(), std::path::PathBuf::from("Leafwise.toml"));
}

#[test]
fn zero_workers_means_available_parallelism() {
    let cfg = ConfigFile::default();
    assert!(cfg.run.effective_workers() >= 1);
}

#[test]
fn invalid_settings_are_rejected() {
    let mut cfg = ConfigFile::default();
    cfg.run.idle_threshold = 0;
    assert!(validate_config(&cfg).is_err());

    let mut cfg = ConfigFile::default();
    cfg.run.idle_delay_ms = 0;
    assert!(validate_config(&cfg).is_err());

    let mut cfg = ConfigFile::default();
    cfg.tree.depth = 0;
    assert!(validate_config(&cfg).is_err());

    let mut cfg = ConfigFile::default();
    cfg.tree.max_children = 0;
    assert!(validate_config(&cfg).is_err());

    let mut cfg = ConfigFile::default();
    cfg.work.min_ms = 10;
    cfg.work.max_ms = 5;
    assert!(validate_config(&cfg).is_err());
}

#[test]
fn broken_toml_is_an_error() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Leafwise.toml");
    fs::write(&path, "[run\nworkers = ")?;
    assert!(load_and_validate(&path).is_err());
    Ok(())
}
