//! Configuration schema definitions for envdoctor.
//!
//! This module contains all the struct definitions that map to
//! the YAML configuration file format.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for `.envdoctor/config.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DoctorConfig {
    /// Application name (for display purposes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,

    /// Global settings
    pub settings: Settings,

    /// Check definitions, in the order they run
    pub checks: Vec<CheckConfig>,
}

impl DoctorConfig {
    /// Look up a check definition by name.
    pub fn check(&self, name: &str) -> Option<&CheckConfig> {
        self.checks.iter().find(|c| c.name == name)
    }
}

/// Global settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_output: Option<OutputMode>,
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}

/// Configuration for a single check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Unique check name
    pub name: String,

    /// Label shown in reports (defaults to the name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// What the check inspects
    #[serde(flatten)]
    pub kind: CheckKind,

    /// Failures are reported but do not block
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,

    /// Shell command that repairs the environment (makes the check automatic)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,

    /// What the operator has to do (makes the check manual)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl CheckConfig {
    /// Whether this check repairs the environment itself.
    pub fn is_automatic(&self) -> bool {
        self.fix.is_some()
    }
}

/// The inspection performed by a check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckKind {
    /// Passes when the command exits with status 0
    Command { command: String },
    /// Passes when the path exists (relative to the project root)
    File { path: PathBuf },
    /// Passes when the environment variable is set and non-empty
    Env { var: String },
}

impl CheckKind {
    /// Kind name as written in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Command { .. } => "command",
            CheckKind::File { .. } => "file",
            CheckKind::Env { .. } => "env",
        }
    }
}

fn is_false(v: &bool) -> bool {
    !v
}
