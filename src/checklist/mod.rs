// src/checklist/mod.rs

//! Checklist data model and construction.
//!
//! - [`step`] defines the `Step`/`Command` types the engine runs over.
//! - [`builtin`] builds the default Python-package release sequence.
//! - [`template`] expands `{placeholder}`s when a checklist is loaded
//!   from a TOML file instead.

pub mod builtin;
pub mod step;
pub mod template;

pub use builtin::release_steps;
pub use step::{Command, Step};
pub use template::TemplateVars;

use anyhow::{Context, Result};

use crate::config::ChecklistFile;

/// Identity of the release being made, as supplied on the command line.
///
/// These values parameterise the step messages and commands; the engine
/// itself never interprets them.
#[derive(Debug, Clone)]
pub struct ReleaseInfo {
    pub name: String,
    pub pypi: String,
    pub repo: String,
    pub module: String,
    pub version: String,
    pub next_version: String,
    /// Interpreter used for the regression step.
    pub python: String,
}

/// Turn a validated checklist file into concrete steps by expanding
/// placeholders in messages, command tokens and working directories.
pub fn resolve(file: &ChecklistFile, vars: &TemplateVars) -> Result<Vec<Step>> {
    let mut steps = Vec::with_capacity(file.steps.len());

    for (index, raw) in file.steps.iter().enumerate() {
        let context = || format!("expanding step {} ({:?})", index + 1, raw.message);

        let message = vars.expand(&raw.message).with_context(context)?;

        let mut commands = Vec::with_capacity(raw.commands.len());
        for tokens in &raw.commands {
            let expanded: Vec<String> = tokens
                .iter()
                .map(|token| vars.expand(token))
                .collect::<Result<_>>()
                .with_context(context)?;
            commands.push(Command::new(expanded));
        }

        let mut step = Step::new(message, commands);
        if let Some(cwd) = &raw.cwd {
            step = step.with_cwd(vars.expand(cwd).with_context(context)?);
        }
        steps.push(step);
    }

    Ok(steps)
}
