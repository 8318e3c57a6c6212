//! Remediation shared by the built-in check kinds.

use std::path::PathBuf;

use anyhow::anyhow;

use super::{FixError, FixOutcome};
use crate::shell::execute;

/// How a built-in check repairs the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Remedy {
    /// Run a shell command; the check is automatically fixable.
    Command(String),
    /// Tell the operator what to do; the check is manual.
    Instructions(String),
}

impl Remedy {
    /// Whether applying this remedy changes the environment.
    pub fn is_automatic(&self) -> bool {
        matches!(self, Remedy::Command(_))
    }

    /// Apply the remedy.
    ///
    /// In dry-run mode commands are not executed and the fix reports itself
    /// as skipped.
    pub fn apply(&self, ctx: &FixContext) -> Result<FixOutcome, FixError> {
        match self {
            Remedy::Instructions(text) => Ok(FixOutcome::Instruction(text.clone())),
            Remedy::Command(command) => {
                if ctx.dry_run {
                    return Err(FixError::skipped(format!("would run: {}", command)));
                }

                let result = execute(command, ctx.cwd.as_deref()).map_err(anyhow::Error::from)?;

                if result.success {
                    Ok(FixOutcome::Applied)
                } else {
                    let ended = result.exit_description();
                    let err = match result.last_output_line() {
                        Some(line) => anyhow!("`{}` {}: {}", command, ended, line),
                        None => anyhow!("`{}` {}", command, ended),
                    };
                    Err(FixError::Failed(err))
                }
            }
        }
    }
}

/// Where and how automatic remedies run.
#[derive(Debug, Clone, Default)]
pub struct FixContext {
    /// Working directory for fix commands.
    pub cwd: Option<PathBuf>,
    /// Report fixes as skipped instead of running them.
    pub dry_run: bool,
}
