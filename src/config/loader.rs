// src/config/loader.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::model::ChecklistFile;
use crate::config::validate::validate_checklist;

/// Load a checklist file from a given path and return the raw
/// `ChecklistFile`.
///
/// This only performs TOML deserialization; it does **not** perform
/// semantic validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ChecklistFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading checklist file at {:?}", path))?;

    let checklist: ChecklistFile = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML checklist from {:?}", path))?;

    Ok(checklist)
}

/// Load a checklist file from path and run basic validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Checks for:
///   - at least one step,
///   - non-empty messages,
///   - no empty commands or empty tokens.
///
/// Placeholder expansion happens later, in `checklist::resolve`, once the
/// release settings are known.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ChecklistFile> {
    let checklist = load_from_path(&path)?;
    validate_checklist(&checklist)?;
    Ok(checklist)
}
