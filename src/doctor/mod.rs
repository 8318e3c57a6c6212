//! The diagnostics engine.
//!
//! A run goes diagnose → classify → report → fix → re-verify:
//!
//! - [`diagnosis`] - Runs every registered check in order and collects
//!   required and optional fix candidates
//! - [`candidate`] - Fix candidates and result classification
//! - [`dispatcher`] - Prints manual instructions, applies and verifies
//!   automatic fixes
//! - [`controller`] - The [`Doctor`] that sequences a single run

pub mod candidate;
pub mod controller;
pub mod diagnosis;
pub mod dispatcher;

#[cfg(test)]
pub(crate) mod fake;

pub use candidate::{classify, FixCandidate};
pub use controller::{Doctor, RunOutcome};
pub use diagnosis::{run_diagnosis, Diagnosis};
pub use dispatcher::{report_manual_fixes, run_auto_fixes, AutoFixReport, ManualReport};
