// src/checklist/builtin.rs

//! The default release checklist, used when no `--checklist` file is given.
//!
//! This is the classic Python-package release sequence: bump the module
//! version, update the release notes, run the regression suite, rebuild
//! the docs, commit/tag/push, build and publish with flit, then bump to
//! the next development version and clean up deprecated code.

use crate::checklist::{Command, ReleaseInfo, Step};
use crate::engine::RunConfig;

fn cmd<const N: usize>(tokens: [&str; N]) -> Command {
    Command::new(tokens)
}

/// Build the default step sequence for one release.
pub fn release_steps(release: &ReleaseInfo, config: &RunConfig) -> Vec<Step> {
    let ReleaseInfo {
        name,
        repo,
        module,
        version,
        next_version,
        python,
        ..
    } = release;
    let editor = config.editor.as_str();

    let init_py = format!("{module}/__init__.py");
    let edit_version = vec![
        cmd([editor, init_py.as_str()]),
        cmd(["pip", "install", "-e", "."]),
    ];
    let edit_notes = vec![cmd([editor, "docs/release-notes.rst"])];
    let release_message = format!("{name} version {version}");
    let tag = format!("v{version}");

    vec![
        Step::new(
            format!("Set {module}.__version__ to \"{version}\":"),
            edit_version.clone(),
        ),
        Step::new("Update release notes:", edit_notes.clone()),
        Step::new(
            "Run regression to ensure all tests pass:",
            vec![cmd([python.as_str(), "regression.py"])],
        ),
        Step::new(
            "Rebuild documentation from scratch:",
            vec![cmd(["make", "clean"]), cmd(["make", "html"])],
        )
        .with_cwd("docs"),
        Step::new(
            "Update the classifiers and descriptions in pyproject.toml:",
            vec![cmd([editor, "pyproject.toml"])],
        ),
        Step::new(
            "Commit the release changes:",
            vec![cmd(["git", "commit", "-a", "-m", release_message.as_str()])],
        ),
        Step::new("Push the release commit:", vec![cmd(["git", "push"])]),
        Step::new(
            "Tag the release commit:",
            vec![cmd([
                "git",
                "tag",
                "-a",
                tag.as_str(),
                "-m",
                release_message.as_str(),
            ])],
        ),
        Step::new(
            "Push the release tag:",
            vec![cmd(["git", "push", "origin", tag.as_str()])],
        ),
        Step::new(
            format!("Create release \"{name} {version}\" in Github:"),
            edit_notes.clone(),
        ),
        Step::new(
            "Build the new source release:",
            vec![cmd(["rm", "-rf", "dist"]), cmd(["flit", "build"])],
        ),
        Step::new(
            "Upload the source release to PyPi:",
            vec![cmd(["flit", "publish"])],
        ),
        Step::new(
            format!("Bump {module}.__version__ to \"{next_version}\":"),
            edit_version,
        ),
        Step::new(
            "Commit the development changes:",
            vec![cmd(["git", "commit", "-a", "-m", "Bump version number."])],
        ),
        Step::new("Push the development commit:", vec![cmd(["git", "push"])]),
        Step::new(
            format!("Post details to https://github.com/{repo}/discussions"),
            edit_notes,
        ),
        Step::new(
            "Remove any features that were deprecated in the new release:",
            Vec::new(),
        ),
        Step::new(
            "Commit the deprecation changes:",
            vec![cmd(["git", "commit", "-a", "-m", "Remove deprecated code."])],
        ),
        Step::new("Push the deprecation commit:", vec![cmd(["git", "push"])]),
    ]
}
