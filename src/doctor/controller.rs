//! Top-level run sequencing.

use std::rc::Rc;

use tracing::info;

use crate::checks::{Check, CheckRegistry};
use crate::error::Result;
use crate::ui::UserInterface;

use super::candidate::{fixes_needed_line, FixCandidate};
use super::diagnosis::{run_diagnosis, Diagnosis};
use super::dispatcher::{report_manual_fixes, run_auto_fixes};

/// Terminal state of a single [`Doctor::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every check passed.
    AllClean,
    /// At least one failing check needs the operator; nothing was changed.
    ManualFixesPending {
        /// Deduplicated instructions that were shown.
        instructions: Vec<String>,
    },
    /// Automatic fixes were attempted for the required failures.
    AutoFixesAttempted {
        /// Number of verified fixes.
        fixed: usize,
        /// Checks still failing after their fix.
        unresolved: Vec<String>,
    },
}

impl RunOutcome {
    /// Whether the environment is healthy after the run.
    pub fn is_success(&self) -> bool {
        match self {
            Self::AllClean => true,
            Self::ManualFixesPending { .. } => false,
            Self::AutoFixesAttempted { unresolved, .. } => unresolved.is_empty(),
        }
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// The run controller.
///
/// Owns the check registry and the candidate lists of the most recent
/// diagnosis. The reporting sink is passed in for every call.
///
/// # Example
///
/// ```
/// use envdoctor::checks::{Check, DiagnosticResult};
/// use envdoctor::doctor::{Doctor, RunOutcome};
/// use envdoctor::ui::MockUI;
///
/// struct Always;
///
/// impl Check for Always {
///     fn name(&self) -> &str { "always" }
///     fn autofix(&self) -> bool { false }
///     fn diagnose(&self) -> DiagnosticResult { DiagnosticResult::ok("Always fine") }
/// }
///
/// let mut doctor = Doctor::default();
/// doctor.registry_mut().register(Always);
///
/// let mut ui = MockUI::new();
/// let outcome = doctor.run(&mut ui).unwrap();
/// assert_eq!(outcome, RunOutcome::AllClean);
/// assert!(ui.has_success("No issues found"));
/// ```
#[derive(Debug, Default)]
pub struct Doctor {
    registry: CheckRegistry,
    diagnosis: Diagnosis,
}

impl Doctor {
    /// Create a doctor over an existing registry.
    pub fn new(registry: CheckRegistry) -> Self {
        Self {
            registry,
            diagnosis: Diagnosis::default(),
        }
    }

    /// Create a doctor from an ordered sequence of checks.
    pub fn from_checks<I>(checks: I) -> Self
    where
        I: IntoIterator<Item = Rc<dyn Check>>,
    {
        let mut registry = CheckRegistry::new();
        registry.register_all(checks);
        Self::new(registry)
    }

    /// The check registry.
    pub fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    /// Mutable access to the check registry, for registration.
    pub fn registry_mut(&mut self) -> &mut CheckRegistry {
        &mut self.registry
    }

    /// Diagnose every check, replacing the previous candidate lists.
    pub fn diagnose(&mut self, ui: &mut dyn UserInterface) -> &Diagnosis {
        self.diagnosis = run_diagnosis(&mut self.registry, ui);
        &self.diagnosis
    }

    /// Failing required checks from the most recent diagnosis.
    pub fn required_candidates(&self) -> &[FixCandidate] {
        &self.diagnosis.required
    }

    /// Failing optional checks from the most recent diagnosis.
    pub fn optional_candidates(&self) -> &[FixCandidate] {
        &self.diagnosis.optional
    }

    /// Diagnose, then report manual fixes or apply automatic ones.
    ///
    /// Manual fixes short-circuit the run: automatic fixes are attempted
    /// only when no failing check (required or optional) needs the
    /// operator. Only malformed checks produce an `Err`.
    pub fn run(&mut self, ui: &mut dyn UserInterface) -> Result<RunOutcome> {
        info!("Diagnosing {} checks", self.registry.len());
        self.diagnose(ui);

        if self.diagnosis.is_clean() {
            info!("No issues found");
            ui.success("No issues found");
            return Ok(RunOutcome::AllClean);
        }

        ui.message(&fixes_needed_line(
            self.diagnosis.required.len(),
            self.diagnosis.optional.len(),
        ));

        let manual =
            report_manual_fixes(&self.diagnosis.required, &self.diagnosis.optional, ui)?;
        if manual.pending {
            info!("Stopping: manual fixes pending");
            return Ok(RunOutcome::ManualFixesPending {
                instructions: manual.instructions,
            });
        }

        info!("Applying automatic fixes");
        let auto = run_auto_fixes(&mut self.diagnosis.required, ui)?;
        Ok(RunOutcome::AutoFixesAttempted {
            fixed: auto.fixed,
            unresolved: auto.unresolved,
        })
    }
}
