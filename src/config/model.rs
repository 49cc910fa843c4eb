// src/config/model.rs

use serde::Deserialize;

/// A checklist as read from a TOML file.
///
/// This is a direct mapping of the file format:
///
/// ```toml
/// [[step]]
/// message = "Run regression to ensure all tests pass:"
/// commands = [["{python}", "regression.py"]]
///
/// [[step]]
/// message = "Rebuild documentation from scratch:"
/// commands = [["make", "clean"], ["make", "html"]]
/// cwd = "docs"
/// ```
///
/// Messages, command tokens and `cwd` may contain `{placeholder}`s that
/// are expanded against the release settings when the file is resolved.
#[derive(Debug, Clone, Deserialize)]
pub struct ChecklistFile {
    /// All steps from `[[step]]`, in file order.
    #[serde(default, rename = "step")]
    pub steps: Vec<StepConfig>,
}

/// One `[[step]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct StepConfig {
    /// Message shown to the operator before the command preview.
    pub message: String,

    /// Commands to run, each an ordered list of argument tokens.
    ///
    /// A step with no commands is a pure reminder; the operator is still
    /// prompted for it.
    #[serde(default)]
    pub commands: Vec<Vec<String>>,

    /// Optional working directory for every command in this step.
    #[serde(default)]
    pub cwd: Option<String>,
}
