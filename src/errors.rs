// src/errors.rs

//! Structured errors for the step-execution engine.
//!
//! Everything outside the engine uses `anyhow` directly; these types exist
//! so a failed run can report exactly which step and command went wrong.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Fatal failure while executing a step's commands.
///
/// A step failure is never retried or recovered from: the orchestrator
/// ends the run and the process exits non-zero. The working-directory
/// override of the failing step is restored before this error propagates.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A command ran and exited with a non-zero status.
    #[error("command `{command}` {status} (step: {step})")]
    CommandFailed {
        step: String,
        command: String,
        status: ExitStatus,
    },

    /// A command could not be spawned at all (typically: not found).
    #[error("failed to launch `{command}` (step: {step})")]
    CommandLaunch {
        step: String,
        command: String,
        #[source]
        source: io::Error,
    },

    /// The step's working-directory override could not be entered.
    #[error("failed to enter working directory {dir:?} (step: {step})")]
    WorkingDir {
        step: String,
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
}
