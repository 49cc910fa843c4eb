// src/engine/mod.rs

//! Step-execution engine.
//!
//! This module ties together:
//! - the prompter (show a step, read a decision)
//! - the executor (run a step's commands with scoped cwd handling)
//! - the orchestrator loop that drives both over the step sequence
//!
//! Everything here is single-threaded and synchronous: the engine blocks
//! on operator input and again while a spawned command runs.

pub mod exec;
pub mod orchestrator;
pub mod prompt;

pub use orchestrator::{RunOutcome, run_checklist};
pub use prompt::{Decision, Prompter, StdinPrompter, parse_decision};

/// Run-wide settings, constructed once at startup and read-only after.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Preview steps and record decisions, but never spawn a command.
    pub dry_run: bool,
    /// Editor program used by the edit steps of the checklist.
    pub editor: String,
}
