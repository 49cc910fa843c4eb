// src/engine/exec.rs

//! Command execution for a single step.
//!
//! Commands run synchronously, strictly in listed order, inheriting the
//! operator's stdin/stdout/stderr. The first command that exits non-zero
//! or fails to launch ends the step (and, via the orchestrator, the run).
//!
//! A step's working-directory override is held by [`CwdGuard`]: the
//! previous directory is restored when the guard drops, so restoration
//! happens on every exit path, including a command failure mid-step.

use std::env;
use std::path::{Path, PathBuf};
use std::process;

use tracing::{debug, info, warn};

use crate::checklist::Step;
use crate::engine::{Decision, RunConfig};
use crate::errors::EngineError;

/// Scoped change of the process working directory.
struct CwdGuard {
    prev: PathBuf,
}

impl CwdGuard {
    fn enter(dir: &Path) -> std::io::Result<Self> {
        let prev = env::current_dir()?;
        env::set_current_dir(dir)?;
        debug!(dir = %dir.display(), "entered step working directory");
        Ok(Self { prev })
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        if let Err(err) = env::set_current_dir(&self.prev) {
            // Nothing to propagate from a destructor; later steps will see
            // the wrong directory, so make it loud.
            warn!(
                dir = %self.prev.display(),
                error = %err,
                "failed to restore working directory"
            );
        } else {
            debug!(dir = %self.prev.display(), "restored working directory");
        }
    }
}

/// Perform (or deliberately not perform) one step.
///
/// Nothing is spawned unless the decision is `Execute` and dry-run is off.
pub fn apply(step: &Step, decision: Decision, config: &RunConfig) -> Result<(), EngineError> {
    match decision {
        Decision::Execute => {}
        Decision::Skip | Decision::Abort => {
            debug!(step = %step.message, ?decision, "step not executed");
            return Ok(());
        }
    }
    if config.dry_run {
        debug!(step = %step.message, "dry run, step not executed");
        return Ok(());
    }

    let _guard = match &step.cwd {
        Some(dir) => Some(CwdGuard::enter(dir).map_err(|source| EngineError::WorkingDir {
            step: step.message.clone(),
            dir: dir.clone(),
            source,
        })?),
        None => None,
    };

    for command in &step.commands {
        run_command(step, command)?;
    }

    Ok(())
}

fn run_command(step: &Step, command: &crate::checklist::Command) -> Result<(), EngineError> {
    info!(command = %command.preview(), "running command");

    let status = process::Command::new(command.program())
        .args(command.args())
        .status()
        .map_err(|source| EngineError::CommandLaunch {
            step: step.message.clone(),
            command: command.preview(),
            source,
        })?;

    if !status.success() {
        return Err(EngineError::CommandFailed {
            step: step.message.clone(),
            command: command.preview(),
            status,
        });
    }

    Ok(())
}
