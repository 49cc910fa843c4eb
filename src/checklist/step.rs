// src/checklist/step.rs

use std::path::PathBuf;

/// A single external command: an ordered list of argument tokens, the
/// first of which is the program name.
///
/// The tokens are stored exactly as they will be passed to the OS; quoting
/// only happens when rendering a preview line for the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    tokens: Vec<String>,
}

impl Command {
    /// Build a command from its tokens.
    ///
    /// An empty token list is rejected by config validation before a
    /// `Command` is ever constructed, so `program()` can assume one token.
    pub fn new(tokens: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// One-line preview of this command for the operator.
    ///
    /// Tokens containing whitespace are wrapped in double quotes so the
    /// echoed line reads like something you could paste into a shell:
    ///
    /// `git commit -a -m "release 1.0"`
    pub fn preview(&self) -> String {
        let rendered: Vec<String> = self
            .tokens
            .iter()
            .map(|token| {
                if token.contains(char::is_whitespace) {
                    format!("\"{token}\"")
                } else {
                    token.clone()
                }
            })
            .collect();
        rendered.join(" ")
    }
}

/// One checklist item: a message shown to the operator, the commands the
/// step would run, and an optional working directory those commands run in.
///
/// Steps are immutable once constructed and are owned by the orchestrator
/// for the duration of a run.
#[derive(Debug, Clone)]
pub struct Step {
    pub message: String,
    pub commands: Vec<Command>,
    /// Directory to run this step's commands in. Entered before the first
    /// command and restored before the next step begins, whether or not a
    /// command failed.
    pub cwd: Option<PathBuf>,
}

impl Step {
    pub fn new(message: impl Into<String>, commands: Vec<Command>) -> Self {
        Self {
            message: message.into(),
            commands,
            cwd: None,
        }
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Unstyled preview lines for this step's command block: the optional
    /// `pushd`/`popd` bracketing plus one line per command.
    pub fn preview_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(dir) = &self.cwd {
            lines.push(format!("pushd {}", dir.display()));
        }
        for command in &self.commands {
            lines.push(command.preview());
        }
        if self.cwd.is_some() {
            lines.push("popd".to_string());
        }
        lines
    }
}
