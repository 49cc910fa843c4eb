// src/config/mod.rs

//! Checklist-file loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a checklist file from disk (`loader.rs`).
//! - Validate basic invariants like non-empty steps (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{ChecklistFile, StepConfig};
pub use validate::validate_checklist;
