// src/config/mod.rs

//! Configuration loading and validation for leafwise.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate basic invariants like sane worker/idle settings (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_or_default};
pub use model::{ConfigFile, RunSection, TreeSection, WorkSection};
pub use validate::validate_config;
