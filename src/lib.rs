// src/lib.rs

pub mod checklist;
pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod logging;

use anyhow::Result;
use tracing::{debug, info};

use crate::checklist::{ReleaseInfo, Step, TemplateVars};
use crate::cli::CliArgs;
use crate::engine::{RunConfig, RunOutcome, StdinPrompter, run_checklist};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - run settings and release identity from the CLI
/// - the step sequence (built-in, or loaded from a `--checklist` file)
/// - Ctrl-C handling
/// - the prompt/execute loop over the steps
pub fn run(args: CliArgs) -> Result<()> {
    let config = RunConfig {
        dry_run: args.dry_run,
        editor: args.editor.clone(),
    };
    let release = ReleaseInfo {
        name: args.name,
        pypi: args.pypi,
        repo: args.repo,
        module: args.module,
        version: args.version,
        next_version: args.nextversion,
        python: args.python,
    };

    let steps = build_steps(&args.checklist, &release, &config)?;
    debug!(steps = steps.len(), dry_run = config.dry_run, "checklist ready");

    // A keyboard interrupt behaves exactly like answering `quit`: end the
    // run successfully, never start another step.
    ctrlc::set_handler(|| {
        println!();
        std::process::exit(0);
    })?;

    let mut prompter = StdinPrompter;
    match run_checklist(&steps, &config, &mut prompter)? {
        RunOutcome::Completed => info!("all steps visited"),
        RunOutcome::Aborted => info!("run aborted before the last step"),
    }

    Ok(())
}

/// Build the step sequence: a custom TOML checklist when `--checklist` is
/// given, the built-in release sequence otherwise.
fn build_steps(
    checklist_path: &Option<String>,
    release: &ReleaseInfo,
    config: &RunConfig,
) -> Result<Vec<Step>> {
    match checklist_path {
        Some(path) => {
            let file = config::load_and_validate(path)?;
            let vars = TemplateVars::new(release, config);
            checklist::resolve(&file, &vars)
        }
        None => Ok(checklist::release_steps(release, config)),
    }
}
