use std::error::Error;
use std::path::PathBuf;

use relcheck::checklist::{Command, ReleaseInfo, release_steps};
use relcheck::engine::RunConfig;

type TestResult = Result<(), Box<dyn Error>>;

fn release() -> ReleaseInfo {
    ReleaseInfo {
        name: "My Project".to_string(),
        pypi: "my-project".to_string(),
        repo: "example/my-project".to_string(),
        module: "myproject".to_string(),
        version: "1.2.3".to_string(),
        next_version: "1.3.0-dev".to_string(),
        python: "python3".to_string(),
    }
}

fn config() -> RunConfig {
    RunConfig {
        dry_run: false,
        editor: "nano".to_string(),
    }
}

#[test]
fn builtin_sequence_matches_the_release_flow() -> TestResult {
    let steps = release_steps(&release(), &config());

    assert_eq!(steps.len(), 19);

    // Version bump step edits the module and reinstalls.
    let first = &steps[0];
    assert_eq!(first.message, "Set myproject.__version__ to \"1.2.3\":");
    assert_eq!(
        first.commands[0].tokens(),
        ["nano", "myproject/__init__.py"]
    );
    assert_eq!(first.commands[1].tokens(), ["pip", "install", "-e", "."]);

    // Regression step uses the configured interpreter.
    let regression = &steps[2];
    assert_eq!(regression.commands[0].tokens(), ["python3", "regression.py"]);

    // Tag and tag-push carry the v-prefixed version.
    let tag = &steps[7];
    assert_eq!(
        tag.commands[0].tokens(),
        ["git", "tag", "-a", "v1.2.3", "-m", "My Project version 1.2.3"]
    );
    let push_tag = &steps[8];
    assert_eq!(push_tag.commands[0].tokens(), ["git", "push", "origin", "v1.2.3"]);

    // The deprecation reminder has a message but nothing to run.
    let reminder = &steps[16];
    assert!(reminder.message.contains("deprecated"));
    assert!(reminder.commands.is_empty());

    Ok(())
}

#[test]
fn docs_step_is_scoped_to_the_docs_directory() -> TestResult {
    let steps = release_steps(&release(), &config());
    let docs = &steps[3];

    assert_eq!(docs.cwd, Some(PathBuf::from("docs")));
    assert_eq!(
        docs.preview_lines(),
        vec!["pushd docs", "make clean", "make html", "popd"]
    );

    Ok(())
}

#[test]
fn preview_quotes_only_whitespace_tokens() {
    let command = Command::new(["git", "commit", "-a", "-m", "release 1.0"]);
    assert_eq!(command.preview(), "git commit -a -m \"release 1.0\"");

    let plain = Command::new(["git", "push"]);
    assert_eq!(plain.preview(), "git push");
}

#[test]
fn commit_preview_quotes_the_release_message() -> TestResult {
    let steps = release_steps(&release(), &config());
    let commit = &steps[5];

    assert_eq!(
        commit.commands[0].preview(),
        "git commit -a -m \"My Project version 1.2.3\""
    );

    Ok(())
}
