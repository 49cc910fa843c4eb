// src/engine/prompt.rs

//! Operator prompting: show a step, read one line, map it to a decision.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use crossterm::style::Stylize;
use tracing::info;

use crate::checklist::Step;
use crate::engine::RunConfig;

/// The operator's choice for one step. Produced fresh per step, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Execute,
    Skip,
    Abort,
}

/// Source of per-step decisions.
///
/// The interactive implementation is [`StdinPrompter`]; tests drive the
/// orchestrator with scripted implementations instead.
pub trait Prompter {
    fn ask(&mut self, step: &Step, config: &RunConfig) -> Result<Decision>;
}

/// Map one input line to a decision.
///
/// The line is taken with its trailing newline already stripped and is
/// otherwise matched verbatim: an empty line executes, `skip` skips,
/// `quit` aborts. Anything else is unrecognised (`None`) and the caller
/// reprompts.
pub fn parse_decision(line: &str) -> Option<Decision> {
    match line {
        "" => Some(Decision::Execute),
        "skip" => Some(Decision::Skip),
        "quit" => Some(Decision::Abort),
        _ => None,
    }
}

/// Interactive prompter reading decisions from stdin.
///
/// `quit` (and end-of-input, which is how a cancelled prompt surfaces)
/// terminates the whole process with exit code 0 on the spot, so no later
/// step can run even if the caller were reentered. The `Abort` variant is
/// still returned to the orchestrator by non-interactive prompters.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, step: &Step, config: &RunConfig) -> Result<Decision> {
        let mut stdout = io::stdout();

        writeln!(stdout, "{}", step.message.as_str().bold().white())?;
        for line in step.preview_lines() {
            writeln!(stdout, "  {}", line.red())?;
        }
        if config.dry_run {
            writeln!(stdout, "  {}", "(dry run: commands will not be executed)".dim())?;
        }

        let stdin = io::stdin();
        loop {
            write!(stdout, "skip/quit/<enter>: ")?;
            stdout.flush()?;

            let mut line = String::new();
            let read = stdin
                .lock()
                .read_line(&mut line)
                .context("reading operator input")?;

            // End of input behaves like `quit`.
            if read == 0 {
                writeln!(stdout)?;
                info!("input closed, aborting run");
                std::process::exit(0);
            }

            let line = line.trim_end_matches(['\r', '\n']);
            match parse_decision(line) {
                Some(Decision::Abort) => {
                    writeln!(stdout)?;
                    info!("operator quit, aborting run");
                    std::process::exit(0);
                }
                Some(decision) => return Ok(decision),
                None => {
                    writeln!(stdout, "unrecognised input {line:?}")?;
                }
            }
        }
    }
}
