// src/config/validate.rs

use anyhow::{Result, anyhow};

use crate::config::model::ChecklistFile;

/// Run basic semantic validation against a loaded checklist.
///
/// This checks:
/// - there is at least one step
/// - every step has a non-empty message
/// - no command is an empty token list, and no token is empty
/// - `cwd`, when present, is non-empty
///
/// It does **not** expand or check placeholders; that happens when the
/// checklist is resolved against the release settings.
pub fn validate_checklist(checklist: &ChecklistFile) -> Result<()> {
    ensure_has_steps(checklist)?;

    for (index, step) in checklist.steps.iter().enumerate() {
        let number = index + 1;

        if step.message.trim().is_empty() {
            return Err(anyhow!("step {number} has an empty message"));
        }

        for tokens in &step.commands {
            if tokens.is_empty() {
                return Err(anyhow!(
                    "step {number} ({:?}) has a command with no tokens",
                    step.message
                ));
            }
            if tokens.iter().any(|token| token.is_empty()) {
                return Err(anyhow!(
                    "step {number} ({:?}) has a command with an empty token",
                    step.message
                ));
            }
        }

        if let Some(cwd) = &step.cwd {
            if cwd.is_empty() {
                return Err(anyhow!(
                    "step {number} ({:?}) has an empty cwd",
                    step.message
                ));
            }
        }
    }

    Ok(())
}

fn ensure_has_steps(checklist: &ChecklistFile) -> Result<()> {
    if checklist.steps.is_empty() {
        return Err(anyhow!(
            "checklist must contain at least one [[step]] section"
        ));
    }
    Ok(())
}
