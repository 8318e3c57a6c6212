//! envdoctor - Diagnose and repair development environments.
//!
//! envdoctor runs a list of pluggable checks against the host, reports which
//! ones fail, prints manual instructions where a human has to act, and
//! otherwise applies automatic fixes and verifies them.
//!
//! # Modules
//!
//! - [`checks`] - The `Check` contract, registry and built-in check kinds
//! - [`doctor`] - Diagnosis, classification and fix dispatch
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Shell command execution
//! - [`ui`] - Reporting sink, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use envdoctor::checks::{Check, DiagnosticResult, FixError, FixOutcome};
//! use envdoctor::doctor::{Doctor, RunOutcome};
//! use envdoctor::ui::MockUI;
//!
//! struct Docker;
//!
//! impl Check for Docker {
//!     fn name(&self) -> &str {
//!         "docker"
//!     }
//!     fn autofix(&self) -> bool {
//!         false
//!     }
//!     fn diagnose(&self) -> DiagnosticResult {
//!         DiagnosticResult::failed("Docker is not running")
//!     }
//!     fn fix(&self) -> Result<FixOutcome, FixError> {
//!         Ok(FixOutcome::Instruction("Start Docker Desktop".into()))
//!     }
//! }
//!
//! let mut doctor = Doctor::default();
//! doctor.registry_mut().register(Docker);
//!
//! let mut ui = MockUI::new();
//! let outcome = doctor.run(&mut ui).unwrap();
//!
//! assert!(matches!(outcome, RunOutcome::ManualFixesPending { .. }));
//! assert!(ui.has_message("Start Docker Desktop"));
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod doctor;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{DoctorError, Result};
