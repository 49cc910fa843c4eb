// src/engine/orchestrator.rs

//! The run loop: one prompt + one (conditional) execution per step, in
//! order, until the sequence ends, the operator aborts, or a step fails.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::checklist::Step;
use crate::engine::exec;
use crate::engine::prompt::{Decision, Prompter};
use crate::engine::RunConfig;

/// How a run ended, short of a fatal step failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every step was visited.
    Completed,
    /// The operator aborted; remaining steps were never prompted.
    Aborted,
}

/// Drive the prompter and executor over `steps` in order.
///
/// The step sequence is immutable input: the orchestrator never reorders,
/// retries, or skips a step on its own. A step failure propagates as an
/// error (ending the run); an `Abort` decision ends the run successfully.
pub fn run_checklist(
    steps: &[Step],
    config: &RunConfig,
    prompter: &mut dyn Prompter,
) -> Result<RunOutcome> {
    let total = steps.len();

    for (index, step) in steps.iter().enumerate() {
        debug!(step = index + 1, total, message = %step.message, "prompting step");

        let decision = prompter.ask(step, config)?;
        if decision == Decision::Abort {
            info!(step = index + 1, total, "run aborted by operator");
            return Ok(RunOutcome::Aborted);
        }

        exec::apply(step, decision, config)
            .with_context(|| format!("step {} of {} failed", index + 1, total))?;
    }

    info!(total, "checklist completed");
    Ok(RunOutcome::Completed)
}
