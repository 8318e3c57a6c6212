//! Manual and automatic fix dispatch.

use tracing::{debug, warn};

use crate::checks::{FixError, FixOutcome};
use crate::error::{DoctorError, Result};
use crate::ui::UserInterface;

use super::candidate::{report_detail, FixCandidate};

/// Header printed above the manual instructions.
pub const MANUAL_FIXES_HEADER: &str = "Fix the following manually, then run envdoctor again:";

/// Outcome of [`report_manual_fixes`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualReport {
    /// Instructions shown to the operator, deduplicated, in first-seen order.
    pub instructions: Vec<String>,
    /// Whether any manual candidate existed in either group.
    pub pending: bool,
}

/// Outcome of [`run_auto_fixes`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoFixReport {
    /// Number of candidates whose fix was verified.
    pub fixed: usize,
    /// Names of automatic candidates still unfixed.
    pub unresolved: Vec<String>,
}

impl AutoFixReport {
    /// True when every automatic candidate was fixed.
    pub fn all_fixed(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Collect and print the instructions of every manual candidate.
///
/// Required candidates are asked first, then optional ones. A check that
/// fails to produce its instruction is reported and skipped. A manual check
/// that claims to have applied a fix, returns a blank instruction, or has no
/// fix at all is malformed and aborts the run.
pub fn report_manual_fixes(
    required: &[FixCandidate],
    optional: &[FixCandidate],
    ui: &mut dyn UserInterface,
) -> Result<ManualReport> {
    let mut report = ManualReport::default();

    for candidate in required.iter().chain(optional).filter(|c| !c.is_automatic()) {
        report.pending = true;
        let name = candidate.name();

        match candidate.check.fix() {
            Ok(FixOutcome::Instruction(text)) if !text.trim().is_empty() => {
                debug!("Manual fix for '{}': {}", name, text);
                if !report.instructions.contains(&text) {
                    report.instructions.push(text);
                }
            }
            Ok(FixOutcome::Instruction(_)) => {
                return Err(malformed(name, "manual fix returned an empty instruction"));
            }
            Ok(FixOutcome::Applied) => {
                return Err(malformed(name, "manual fix must not apply changes"));
            }
            Err(FixError::Unsupported) => {
                return Err(malformed(name, "no fix implementation"));
            }
            Err(e) => {
                warn!("Could not get instructions for '{}': {}", name, e);
                ui.error(&format!("Failed to get instructions for {}: {:#}", name, e));
            }
        }
    }

    if !report.instructions.is_empty() {
        ui.message(MANUAL_FIXES_HEADER);
        for instruction in &report.instructions {
            ui.message(&format!("  - {}", instruction));
        }
    }

    Ok(report)
}

/// Apply every automatic candidate's fix and verify it.
///
/// Candidates are independent: a skipped or failed fix is reported and the
/// next candidate is attempted. A candidate is marked fixed only when a
/// fresh diagnosis after the fix passes.
pub fn run_auto_fixes(
    candidates: &mut [FixCandidate],
    ui: &mut dyn UserInterface,
) -> Result<AutoFixReport> {
    let mut report = AutoFixReport::default();

    for candidate in candidates.iter_mut().filter(|c| c.is_automatic()) {
        let name = candidate.name().to_string();
        let mut spinner = ui.start_spinner(&format!("Fixing {}...", name));
        let outcome = candidate.check.fix();
        spinner.clear();

        match outcome {
            Ok(FixOutcome::Applied) => {
                let result = candidate.check.diagnose();
                if result.ok {
                    debug!("Fix for '{}' verified", name);
                    candidate.fixed = true;
                    report.fixed += 1;
                    ui.success(&format!("Fixed {}", name));
                } else {
                    debug!("Fix for '{}' applied but check still fails", name);
                    ui.warning(&format!("{} is still failing: {}", name, result.message));
                    report_detail(&result, ui);
                }
            }
            Ok(FixOutcome::Instruction(_)) => {
                return Err(malformed(&name, "automatic fix returned an instruction"));
            }
            Err(FixError::Skipped { reason }) => {
                debug!("Fix for '{}' skipped: {}", name, reason);
                ui.message(&format!("Skipped {}: {}", name, reason));
            }
            Err(FixError::Failed(e)) => {
                warn!("Fix for '{}' failed: {:#}", name, e);
                ui.error(&format!("Failed to fix {}: {:#}", name, e));
            }
            Err(FixError::Unsupported) => {
                return Err(malformed(&name, "no fix implementation"));
            }
        }
    }

    report.unresolved = candidates
        .iter()
        .filter(|c| c.is_automatic() && !c.fixed)
        .map(|c| c.name().to_string())
        .collect();

    if report.all_fixed() {
        ui.success("All automatic fixes applied");
    } else {
        ui.warning(&format!(
            "{} issue(s) could not be fixed automatically",
            report.unresolved.len()
        ));
    }

    Ok(report)
}

fn malformed(check: &str, reason: &str) -> DoctorError {
    DoctorError::MalformedCheck {
        check: check.to_string(),
        reason: reason.to_string(),
    }
}
