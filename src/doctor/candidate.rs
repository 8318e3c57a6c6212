//! Result classification.

use std::fmt;
use std::rc::Rc;

use crate::checks::{Check, DiagnosticResult};
use crate::ui::{Level, UserInterface};

/// A failing check recorded for remediation in the current run.
#[derive(Clone)]
pub struct FixCandidate {
    /// Message of the diagnosis that failed.
    pub error: String,
    /// The check that produced the failure.
    pub check: Rc<dyn Check>,
    /// Set once an automatic fix has been verified by a fresh diagnosis.
    pub fixed: bool,
}

impl FixCandidate {
    /// Create an unfixed candidate.
    pub fn new(error: impl Into<String>, check: Rc<dyn Check>) -> Self {
        Self {
            error: error.into(),
            check,
            fixed: false,
        }
    }

    /// Name of the underlying check.
    pub fn name(&self) -> &str {
        self.check.name()
    }

    /// Whether the underlying check remediates itself.
    pub fn is_automatic(&self) -> bool {
        self.check.autofix()
    }
}

impl fmt::Debug for FixCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixCandidate")
            .field("check", &self.check.name())
            .field("error", &self.error)
            .field("fixed", &self.fixed)
            .finish()
    }
}

/// Record `check` as a fix candidate if its diagnosis failed.
///
/// Passing results leave `candidates` untouched.
pub fn classify(
    result: &DiagnosticResult,
    candidates: &mut Vec<FixCandidate>,
    check: &Rc<dyn Check>,
) {
    if !result.ok {
        candidates.push(FixCandidate::new(&result.message, Rc::clone(check)));
    }
}

/// Emit the report line for a single diagnosis.
pub(crate) fn report_result(result: &DiagnosticResult, ui: &mut dyn UserInterface) {
    match (result.ok, result.optional) {
        (true, _) => ui.success(&result.message),
        (false, false) => ui.error(&result.message),
        (false, true) => ui.warning(&result.message),
    }
    if !result.ok {
        report_detail(result, ui);
    }
}

/// Emit a failing result's captured output when the mode is verbose.
pub(crate) fn report_detail(result: &DiagnosticResult, ui: &mut dyn UserInterface) {
    if let Some(detail) = &result.detail {
        if ui.output_mode().shows(Level::Detail) {
            ui.detail(detail);
        }
    }
}

/// Summary line for the number of fixes needed.
pub(crate) fn fixes_needed_line(required: usize, optional: usize) -> String {
    let total = required + optional;
    format!(
        "{} {} needed ({} required, {} optional)",
        total,
        if total == 1 { "fix" } else { "fixes" },
        required,
        optional
    )
}
