use std::collections::VecDeque;
use std::error::Error;
use std::path::Path;

use relcheck::checklist::{Command, Step};
use relcheck::engine::{
    Decision, Prompter, RunConfig, RunOutcome, parse_decision, run_checklist,
};
use relcheck::errors::EngineError;

type TestResult = Result<(), Box<dyn Error>>;

/// Feeds a fixed script of decisions to the orchestrator and records which
/// steps were prompted.
struct ScriptedPrompter {
    decisions: VecDeque<Decision>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    fn new(decisions: impl IntoIterator<Item = Decision>) -> Self {
        Self {
            decisions: decisions.into_iter().collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, step: &Step, _config: &RunConfig) -> anyhow::Result<Decision> {
        self.asked.push(step.message.clone());
        self.decisions
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("prompted for more steps than scripted"))
    }
}

fn config(dry_run: bool) -> RunConfig {
    RunConfig {
        dry_run,
        editor: "vi".to_string(),
    }
}

/// A step whose single command creates `marker`, so a test can tell
/// whether the step's commands actually ran.
fn touch_step(message: &str, marker: &Path) -> Step {
    let marker = marker.display().to_string();
    Step::new(message, vec![Command::new(["touch", marker.as_str()])])
}

#[test]
fn dry_run_spawns_no_commands() -> TestResult {
    let dir = tempfile::tempdir()?;
    let markers: Vec<_> = (0..3).map(|i| dir.path().join(format!("m{i}"))).collect();
    let steps: Vec<Step> = markers
        .iter()
        .enumerate()
        .map(|(i, marker)| touch_step(&format!("step {i}"), marker))
        .collect();

    let mut prompter = ScriptedPrompter::new([
        Decision::Execute,
        Decision::Execute,
        Decision::Execute,
    ]);
    let outcome = run_checklist(&steps, &config(true), &mut prompter)?;

    assert_eq!(outcome, RunOutcome::Completed);
    assert_eq!(prompter.asked.len(), 3, "every step is still prompted");
    for marker in &markers {
        assert!(!marker.exists(), "dry run must not spawn commands");
    }

    Ok(())
}

#[test]
fn abort_skips_all_later_steps() -> TestResult {
    let dir = tempfile::tempdir()?;
    let markers: Vec<_> = (0..3).map(|i| dir.path().join(format!("m{i}"))).collect();
    let steps: Vec<Step> = markers
        .iter()
        .enumerate()
        .map(|(i, marker)| touch_step(&format!("step {i}"), marker))
        .collect();

    let mut prompter = ScriptedPrompter::new([Decision::Execute, Decision::Abort]);
    let outcome = run_checklist(&steps, &config(false), &mut prompter)?;

    assert_eq!(outcome, RunOutcome::Aborted);
    assert_eq!(prompter.asked, vec!["step 0", "step 1"]);
    assert!(markers[0].exists());
    assert!(!markers[1].exists(), "aborted step must not execute");
    assert!(!markers[2].exists(), "steps after an abort are never reached");

    Ok(())
}

#[test]
fn skip_leaves_step_unexecuted_but_continues() -> TestResult {
    let dir = tempfile::tempdir()?;
    let markers: Vec<_> = (0..3).map(|i| dir.path().join(format!("m{i}"))).collect();
    let steps: Vec<Step> = markers
        .iter()
        .enumerate()
        .map(|(i, marker)| touch_step(&format!("step {i}"), marker))
        .collect();

    let mut prompter =
        ScriptedPrompter::new([Decision::Execute, Decision::Skip, Decision::Execute]);
    let outcome = run_checklist(&steps, &config(false), &mut prompter)?;

    assert_eq!(outcome, RunOutcome::Completed);
    assert_eq!(prompter.asked.len(), 3);
    assert!(markers[0].exists());
    assert!(!markers[1].exists(), "skipped step must not execute");
    assert!(markers[2].exists());

    Ok(())
}

#[test]
fn failed_command_stops_run_and_restores_cwd() -> TestResult {
    let dir = tempfile::tempdir()?;
    let sub = dir.path().join("sub");
    std::fs::create_dir(&sub)?;
    let before = std::env::current_dir()?;

    // Step 1: succeeds inside `sub` (relative path proves the cwd override
    // was applied), then fails, leaving step 2 unvisited.
    let failing = Step::new(
        "docs rebuild",
        vec![Command::new(["touch", "inner-marker"]), Command::new(["false"])],
    )
    .with_cwd(&sub);
    let after_marker = dir.path().join("after");
    let steps = vec![failing, touch_step("never reached", &after_marker)];

    let mut prompter = ScriptedPrompter::new([Decision::Execute, Decision::Execute]);
    let err = run_checklist(&steps, &config(false), &mut prompter)
        .expect_err("non-zero exit must be fatal");

    match err.downcast_ref::<EngineError>() {
        Some(EngineError::CommandFailed { step, command, .. }) => {
            assert_eq!(step, "docs rebuild");
            assert_eq!(command, "false");
        }
        other => panic!("expected CommandFailed, got {other:?}"),
    }

    assert_eq!(prompter.asked.len(), 1, "later steps are never prompted");
    assert!(sub.join("inner-marker").exists());
    assert!(!after_marker.exists());
    assert_eq!(
        std::env::current_dir()?,
        before,
        "cwd override must be restored even when a command fails"
    );

    Ok(())
}

#[test]
fn launch_failure_is_fatal() -> TestResult {
    let steps = vec![Step::new(
        "missing tool",
        vec![Command::new(["relcheck-no-such-program-exists"])],
    )];

    let mut prompter = ScriptedPrompter::new([Decision::Execute]);
    let err = run_checklist(&steps, &config(false), &mut prompter)
        .expect_err("unlaunchable command must be fatal");

    assert!(matches!(
        err.downcast_ref::<EngineError>(),
        Some(EngineError::CommandLaunch { .. })
    ));

    Ok(())
}

#[test]
fn commands_within_a_step_run_in_listed_order() -> TestResult {
    let dir = tempfile::tempdir()?;
    let log = dir.path().join("log");
    let log_str = log.display().to_string();

    let first = format!("echo first >> {log_str}");
    let second = format!("echo second >> {log_str}");
    let step = Step::new(
        "ordered",
        vec![
            Command::new(["sh", "-c", first.as_str()]),
            Command::new(["sh", "-c", second.as_str()]),
        ],
    );

    let mut prompter = ScriptedPrompter::new([Decision::Execute]);
    run_checklist(&[step], &config(false), &mut prompter)?;

    assert_eq!(std::fs::read_to_string(&log)?, "first\nsecond\n");

    Ok(())
}

#[test]
fn decision_input_mapping() {
    assert_eq!(parse_decision(""), Some(Decision::Execute));
    assert_eq!(parse_decision("skip"), Some(Decision::Skip));
    assert_eq!(parse_decision("quit"), Some(Decision::Abort));

    // Anything else is unrecognised and makes the prompter ask again.
    assert_eq!(parse_decision(" "), None);
    assert_eq!(parse_decision("Skip"), None);
    assert_eq!(parse_decision("yes"), None);
    assert_eq!(parse_decision("q"), None);
}
