//! Pluggable environment checks.
//!
//! A [`Check`] inspects one aspect of the host (a tool on PATH, a file, an
//! environment variable) and knows how to remediate it, either by doing the
//! work itself (`autofix() == true`) or by describing what the operator has to
//! do. The doctor only ever talks to checks through this trait.
//!
//! # Modules
//!
//! - [`registry`] - Ordered collection of registered checks
//! - [`command`] - Shell-command backed checks
//! - [`file`] - File presence checks
//! - [`env_var`] - Environment variable checks
//! - [`remedy`] - Shared fix behaviour of the built-in kinds
//! - [`builder`] - Construction of checks from configuration

pub mod builder;
pub mod command;
pub mod env_var;
pub mod file;
pub mod registry;
pub mod remedy;

pub use builder::{build_check, build_checks, BuildOptions};
pub use command::CommandCheck;
pub use env_var::EnvVarCheck;
pub use file::FileCheck;
pub use registry::CheckRegistry;
pub use remedy::{FixContext, Remedy};

use thiserror::Error;

/// Outcome of a single `diagnose()` call.
///
/// Immutable once produced. A failing diagnosis is an expected outcome,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticResult {
    /// Whether the inspected aspect of the environment is healthy.
    pub ok: bool,
    /// Whether a failure should be treated as non-blocking.
    pub optional: bool,
    /// Human-readable description of what was found.
    pub message: String,
    /// Supporting output (e.g. a command's last stderr line), shown in verbose mode.
    pub detail: Option<String>,
}

impl DiagnosticResult {
    /// A passing required result.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            optional: false,
            message: message.into(),
            detail: None,
        }
    }

    /// A failing required result.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            optional: false,
            message: message.into(),
            detail: None,
        }
    }

    /// Mark this result as coming from an optional check.
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Attach supporting output to this result.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// What a successful call to [`Check::fix`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixOutcome {
    /// Instruction the operator must carry out (manual checks only).
    Instruction(String),
    /// The remediation ran to completion (automatic checks only).
    Applied,
}

/// Why [`Check::fix`] did not complete.
#[derive(Debug, Error)]
pub enum FixError {
    /// The fix intentionally took no action.
    #[error("fix skipped: {reason}")]
    Skipped { reason: String },

    /// The remediation was attempted and failed.
    #[error(transparent)]
    Failed(#[from] anyhow::Error),

    /// The check has no fix implementation.
    #[error("check does not implement fix")]
    Unsupported,
}

impl FixError {
    /// Create a skipped signal.
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }
}

/// A unit of diagnosis and remediation logic.
///
/// Implementations must not report expected failures through panics; a
/// broken environment is expressed with `DiagnosticResult { ok: false, .. }`.
///
/// For `autofix() == false`, `fix()` must return a non-empty
/// [`FixOutcome::Instruction`] and must not change anything. For
/// `autofix() == true`, `fix()` performs the remediation and returns
/// [`FixOutcome::Applied`], [`FixError::Skipped`] or [`FixError::Failed`].
pub trait Check {
    /// Name shown in reports.
    fn name(&self) -> &str;

    /// Whether `fix()` performs the remediation itself.
    fn autofix(&self) -> bool;

    /// Inspect the environment.
    fn diagnose(&self) -> DiagnosticResult;

    /// Remediate, or describe the remediation.
    fn fix(&self) -> Result<FixOutcome, FixError> {
        Err(FixError::Unsupported)
    }
}
