//! The diagnosis pass.

use std::rc::Rc;

use tracing::debug;

use crate::checks::{Check, CheckRegistry, DiagnosticResult};
use crate::ui::UserInterface;

use super::candidate::{classify, report_result, FixCandidate};

/// Fix candidates produced by one diagnosis pass.
#[derive(Debug, Default, Clone)]
pub struct Diagnosis {
    /// Failing required checks, in registration order.
    pub required: Vec<FixCandidate>,
    /// Failing optional checks, in discovery order.
    pub optional: Vec<FixCandidate>,
}

impl Diagnosis {
    /// True when no check failed.
    pub fn is_clean(&self) -> bool {
        self.required.is_empty() && self.optional.is_empty()
    }

    /// Total number of fix candidates.
    pub fn len(&self) -> usize {
        self.required.len() + self.optional.len()
    }

    /// True when there are no fix candidates.
    pub fn is_empty(&self) -> bool {
        self.is_clean()
    }
}

/// Diagnose every registered check and classify the failures.
///
/// Checks run one at a time in registration order. A check whose result
/// declares it optional leaves the main list for the registry's optional
/// group; the optional group is diagnosed again after the main list is
/// exhausted and its failures go to [`Diagnosis::optional`].
pub fn run_diagnosis(registry: &mut CheckRegistry, ui: &mut dyn UserInterface) -> Diagnosis {
    let mut diagnosis = Diagnosis::default();

    let checks = registry.take_checks();
    let mut required = Vec::with_capacity(checks.len());
    for check in checks {
        let result = diagnose_with_spinner(&check, ui);
        if result.optional {
            debug!("Check '{}' reported itself optional", check.name());
            registry.push_optional(check);
            continue;
        }
        report_result(&result, ui);
        classify(&result, &mut diagnosis.required, &check);
        required.push(check);
    }
    registry.restore_checks(required);

    for check in registry.optional_checks() {
        let result = diagnose_with_spinner(check, ui);
        report_result(&result, ui);
        classify(&result, &mut diagnosis.optional, check);
    }

    debug!(
        "Diagnosis finished: {} required and {} optional fix candidates",
        diagnosis.required.len(),
        diagnosis.optional.len()
    );
    diagnosis
}

/// Run one check's diagnosis behind a transient spinner.
fn diagnose_with_spinner(check: &Rc<dyn Check>, ui: &mut dyn UserInterface) -> DiagnosticResult {
    let mut spinner = ui.start_spinner(&format!("Checking {}...", check.name()));
    let result = check.diagnose();
    spinner.clear();
    debug!(
        "Check '{}': ok={} optional={} ({})",
        check.name(),
        result.ok,
        result.optional,
        result.message
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doctor::fake::{FakeCheck, FakeFix};
    use crate::ui::{MockUI, UiEvent};

    fn names(candidates: &[FixCandidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.name()).collect()
    }

    fn optional_failing(name: &str) -> FakeCheck {
        FakeCheck::new(
            name,
            false,
            FakeFix::Instruction(format!("fix {}", name)),
            vec![DiagnosticResult::failed(format!("{} missing", name)).optional(true)],
        )
    }

    #[test]
    fn all_passing_checks_leave_no_candidates() {
        let mut registry = CheckRegistry::new();
        registry
            .register(FakeCheck::passing("a"))
            .register(FakeCheck::passing("b"));
        let mut ui = MockUI::new();

        let diagnosis = run_diagnosis(&mut registry, &mut ui);

        assert!(diagnosis.is_clean());
        assert_eq!(diagnosis.len(), 0);
        assert_eq!(ui.successes(), vec!["a ok", "b ok"]);
    }

    #[test]
    fn ok_required_failing_optional_are_split() {
        let mut registry = CheckRegistry::new();
        registry
            .register(FakeCheck::passing("a"))
            .register(FakeCheck::manual("b", "install b"))
            .register(optional_failing("c"));
        let mut ui = MockUI::new();

        let diagnosis = run_diagnosis(&mut registry, &mut ui);

        assert_eq!(names(&diagnosis.required), vec!["b"]);
        assert_eq!(names(&diagnosis.optional), vec!["c"]);
    }

    #[test]
    fn optional_checks_never_reach_required_list() {
        let passing_optional = FakeCheck::new(
            "p",
            false,
            FakeFix::Instruction("x".into()),
            vec![DiagnosticResult::ok("p ok").optional(true)],
        );
        let mut registry = CheckRegistry::new();
        registry
            .register(passing_optional)
            .register(optional_failing("q"));
        let mut ui = MockUI::new();

        let diagnosis = run_diagnosis(&mut registry, &mut ui);

        assert!(diagnosis.required.is_empty());
        assert_eq!(names(&diagnosis.optional), vec!["q"]);
        assert!(registry.checks().is_empty());
        assert_eq!(registry.optional_checks().len(), 2);
    }

    #[test]
    fn optional_check_is_diagnosed_twice_on_discovery_then_once() {
        let c = Rc::new(optional_failing("c"));
        let mut registry = CheckRegistry::new();
        registry.register_shared(c.clone());
        let mut ui = MockUI::new();

        run_diagnosis(&mut registry, &mut ui);
        assert_eq!(c.diagnose_calls.get(), 2);

        run_diagnosis(&mut registry, &mut ui);
        assert_eq!(c.diagnose_calls.get(), 3);
    }

    #[test]
    fn repeated_diagnosis_is_idempotent() {
        let mut registry = CheckRegistry::new();
        registry
            .register(FakeCheck::passing("a"))
            .register(FakeCheck::manual("b", "install b"))
            .register(optional_failing("c"))
            .register(FakeCheck::manual("d", "install d"));
        let mut ui = MockUI::new();

        let first = run_diagnosis(&mut registry, &mut ui);
        let second = run_diagnosis(&mut registry, &mut ui);

        assert_eq!(names(&first.required), names(&second.required));
        assert_eq!(names(&first.optional), names(&second.optional));
        assert_eq!(names(&second.required), vec!["b", "d"]);
        assert_eq!(names(&second.optional), vec!["c"]);
    }

    #[test]
    fn optional_pass_runs_after_required_pass() {
        let mut registry = CheckRegistry::new();
        registry
            .register(optional_failing("opt"))
            .register(FakeCheck::manual("req", "install req"));
        let mut ui = MockUI::new();

        run_diagnosis(&mut registry, &mut ui);

        let reported: Vec<_> = ui
            .events()
            .iter()
            .filter(|e| !matches!(e, UiEvent::Spinner(_)))
            .cloned()
            .collect();
        assert_eq!(
            reported,
            vec![
                UiEvent::Error("req missing".into()),
                UiEvent::Warning("opt missing".into()),
            ]
        );
    }

    #[test]
    fn every_diagnosis_gets_a_spinner() {
        let mut registry = CheckRegistry::new();
        registry
            .register(FakeCheck::passing("a"))
            .register(optional_failing("b"));
        let mut ui = MockUI::new();

        run_diagnosis(&mut registry, &mut ui);

        assert_eq!(
            ui.spinners(),
            vec!["Checking a...", "Checking b...", "Checking b..."]
        );
    }

    #[test]
    fn duplicate_registration_runs_twice() {
        let a = Rc::new(FakeCheck::manual("a", "install a"));
        let mut registry = CheckRegistry::new();
        registry.register_shared(a.clone()).register_shared(a.clone());
        let mut ui = MockUI::new();

        let diagnosis = run_diagnosis(&mut registry, &mut ui);

        assert_eq!(a.diagnose_calls.get(), 2);
        assert_eq!(names(&diagnosis.required), vec!["a", "a"]);
    }
}
