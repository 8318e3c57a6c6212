//! Error types for envdoctor operations.
//!
//! This module defines [`DoctorError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A failing diagnosis is not an error; it is a [`DiagnosticResult`](crate::checks::DiagnosticResult)
//!   with `ok == false`
//! - Failures raised by a check's fix are [`FixError`](crate::checks::FixError)s and are
//!   reported, never propagated
//! - `DoctorError` is reserved for conditions that stop a run: bad configuration
//!   and malformed checks

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envdoctor operations.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A check broke its contract (no usable fix, wrong fix shape).
    #[error("Check '{check}' is malformed: {reason}")]
    MalformedCheck { check: String, reason: String },

    /// The shell for a command could not be started.
    #[error("Could not start `{command}`: {source}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envdoctor operations.
pub type Result<T> = std::result::Result<T, DoctorError>;
