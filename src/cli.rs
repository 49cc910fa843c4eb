// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `relcheck`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "relcheck",
    version,
    about = "Walks you through releasing a Python package, one step at a time.",
    long_about = None
)]
pub struct CliArgs {
    /// Preview every step but don't actually run any commands.
    #[arg(long)]
    pub dry_run: bool,

    /// Text editor used by the edit steps.
    #[arg(long, value_name = "PROGRAM", default_value = "vi")]
    pub editor: String,

    /// Python interpreter used by the regression step.
    #[arg(long, value_name = "PROGRAM", default_value = "python")]
    pub python: String,

    /// Path to a TOML checklist replacing the built-in release sequence.
    #[arg(long, value_name = "PATH")]
    pub checklist: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `RELCHECK_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Project name.
    pub name: String,

    /// PyPI name.
    pub pypi: String,

    /// Repository <org>/<repo> identifier.
    pub repo: String,

    /// Python module name.
    pub module: String,

    /// Package release version.
    pub version: String,

    /// Next package version after release.
    pub nextversion: String,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
