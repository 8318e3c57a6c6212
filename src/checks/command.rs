//! Shell-command backed checks.
//!
//! A `CommandCheck` passes when its command exits with status 0, which covers
//! the usual "is this tool installed and working" checks
//! (`node --version`, `docker info`, `pg_isready`).

use std::path::PathBuf;

use super::remedy::{FixContext, Remedy};
use super::{Check, DiagnosticResult, FixError, FixOutcome};
use crate::shell::execute;

/// Check that succeeds when a shell command exits successfully.
#[derive(Debug, Clone)]
pub struct CommandCheck {
    name: String,
    description: Option<String>,
    command: String,
    optional: bool,
    remedy: Remedy,
    ctx: FixContext,
}

impl CommandCheck {
    /// Create a new command check.
    pub fn new(name: impl Into<String>, command: impl Into<String>, remedy: Remedy) -> Self {
        Self {
            name: name.into(),
            description: None,
            command: command.into(),
            optional: false,
            remedy,
            ctx: FixContext::default(),
        }
    }

    /// Set the label used in report lines.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Report failures of this check as optional.
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Run the check command and the fix in this directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.ctx.cwd = Some(dir.into());
        self
    }

    /// Skip automatic fixes instead of running them.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.ctx.dry_run = dry_run;
        self
    }

    /// The check command.
    pub fn command(&self) -> &str {
        &self.command
    }

    fn label(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.name)
    }
}

impl Check for CommandCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn autofix(&self) -> bool {
        self.remedy.is_automatic()
    }

    fn diagnose(&self) -> DiagnosticResult {
        let result = match execute(&self.command, self.ctx.cwd.as_deref()) {
            Ok(r) if r.success => DiagnosticResult::ok(self.label()),
            Ok(r) => {
                let failed = DiagnosticResult::failed(format!(
                    "{}: `{}` {}",
                    self.label(),
                    self.command,
                    r.exit_description()
                ));
                match r.last_output_line() {
                    Some(line) => failed.with_detail(line),
                    None => failed,
                }
            }
            Err(e) => {
                tracing::debug!("Check command for '{}' could not run: {}", self.name, e);
                DiagnosticResult::failed(format!(
                    "{}: `{}` could not be started",
                    self.label(),
                    self.command
                ))
                .with_detail(e.to_string())
            }
        };
        result.optional(self.optional)
    }

    fn fix(&self) -> Result<FixOutcome, FixError> {
        self.remedy.apply(&self.ctx)
    }
}
