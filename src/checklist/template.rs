// src/checklist/template.rs

//! Placeholder expansion for TOML-defined checklists.
//!
//! Checklist files refer to the release being made with `{version}`-style
//! placeholders in messages, command tokens and `cwd`. The full set of
//! placeholders is fixed (see [`TemplateVars::get`]); anything else is a
//! load-time error rather than a silently literal `{typo}` in a command.

use std::collections::BTreeMap;

use anyhow::{Result, anyhow};

use crate::checklist::ReleaseInfo;
use crate::engine::RunConfig;

/// The substitution values available to a checklist file.
///
/// Built once at startup from the CLI arguments and shared across all
/// steps while the checklist is resolved.
#[derive(Debug, Clone)]
pub struct TemplateVars {
    vars: BTreeMap<&'static str, String>,
}

impl TemplateVars {
    pub fn new(release: &ReleaseInfo, config: &RunConfig) -> Self {
        let mut vars = BTreeMap::new();
        vars.insert("name", release.name.clone());
        vars.insert("pypi", release.pypi.clone());
        vars.insert("repo", release.repo.clone());
        vars.insert("module", release.module.clone());
        vars.insert("version", release.version.clone());
        vars.insert("next_version", release.next_version.clone());
        vars.insert("python", release.python.clone());
        vars.insert("editor", config.editor.clone());
        Self { vars }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Expand every `{placeholder}` in `input`.
    ///
    /// `{{` and `}}` escape literal braces. Unknown or unterminated
    /// placeholders are errors.
    pub fn expand(&self, input: &str) -> Result<String> {
        let mut out = String::with_capacity(input.len());
        let mut chars = input.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    out.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    out.push('}');
                }
                '{' => {
                    let mut key = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => key.push(c),
                            None => {
                                return Err(anyhow!(
                                    "unterminated placeholder '{{{key}' in \"{input}\""
                                ));
                            }
                        }
                    }
                    let value = self.get(&key).ok_or_else(|| {
                        anyhow!("unknown placeholder '{{{key}}}' in \"{input}\"")
                    })?;
                    out.push_str(value);
                }
                '}' => {
                    return Err(anyhow!("stray '}}' in \"{input}\""));
                }
                other => out.push(other),
            }
        }

        Ok(out)
    }
}
