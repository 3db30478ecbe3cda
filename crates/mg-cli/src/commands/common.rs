//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use mg_core::Manifest;
use mg_db::Connection;
use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::cli::GlobalArgs;

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that destructors run and the database is closed cleanly.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Control flow only; the command already reported the failure.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// One migration step as shown by `path` and `migrate`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct StepView {
    pub(crate) from: String,
    pub(crate) to: String,
    pub(crate) checksum: String,
}

impl From<&mg_core::Migration> for StepView {
    fn from(migration: &mg_core::Migration) -> Self {
        Self {
            from: migration.origin.clone(),
            to: migration.destination.clone(),
            checksum: migration.checksum(),
        }
    }
}

/// Load the manifest named by `--manifest`.
pub(crate) fn load_manifest(global: &GlobalArgs) -> Result<Manifest> {
    Manifest::discover(Path::new(&global.manifest))
        .with_context(|| format!("Failed to load migration manifest from {}", global.manifest))
}

/// Open the database named by `--database`.
pub(crate) fn open_database(global: &GlobalArgs) -> Result<Connection> {
    mg_db::open(&global.database)
        .with_context(|| format!("Failed to open database {}", global.database))
}

/// Pick the target from a command-line override or the manifest.
pub(crate) fn resolve_target(explicit: Option<&str>, manifest: &Manifest) -> Result<String> {
    explicit
        .map(str::to_string)
        .or_else(|| manifest.target.clone())
        .context("No target schema: pass --target or set `target` in the manifest")
}

/// Render a schema identifier for humans; the empty schema has no name.
pub(crate) fn display_schema(schema: &str) -> &str {
    if schema.is_empty() {
        "(empty)"
    } else {
        schema
    }
}

/// Print steps as an indented, numbered list.
pub(crate) fn print_steps(steps: &[StepView]) {
    for (i, step) in steps.iter().enumerate() {
        println!(
            "  {:>2}. {} -> {}  [{}]",
            i + 1,
            display_schema(&step.from),
            display_schema(&step.to),
            &step.checksum[..12]
        );
    }
}
