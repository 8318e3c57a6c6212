//! Scripted checks for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use crate::checks::{Check, DiagnosticResult, FixError, FixOutcome};

/// What a [`FakeCheck`] does when `fix()` is called.
#[derive(Debug, Clone)]
pub(crate) enum FakeFix {
    Instruction(String),
    Apply,
    Skip(String),
    Fail(String),
    Unsupported,
}

/// A check that replays a scripted sequence of diagnoses.
///
/// Each `diagnose()` pops the next result; the last one repeats forever.
pub(crate) struct FakeCheck {
    name: String,
    autofix: bool,
    results: RefCell<VecDeque<DiagnosticResult>>,
    fix: FakeFix,
    pub diagnose_calls: Cell<usize>,
    pub fix_calls: Cell<usize>,
}

impl FakeCheck {
    pub fn new(name: &str, autofix: bool, fix: FakeFix, results: Vec<DiagnosticResult>) -> Self {
        Self {
            name: name.to_string(),
            autofix,
            results: RefCell::new(results.into()),
            fix,
            diagnose_calls: Cell::new(0),
            fix_calls: Cell::new(0),
        }
    }

    pub fn passing(name: &str) -> Self {
        Self::new(
            name,
            false,
            FakeFix::Instruction(format!("fix {}", name)),
            vec![DiagnosticResult::ok(format!("{} ok", name))],
        )
    }

    pub fn manual(name: &str, instruction: &str) -> Self {
        Self::new(
            name,
            false,
            FakeFix::Instruction(instruction.to_string()),
            vec![DiagnosticResult::failed(format!("{} missing", name))],
        )
    }

    pub fn automatic(name: &str, fix: FakeFix, results: Vec<DiagnosticResult>) -> Self {
        Self::new(name, true, fix, results)
    }
}

impl Check for FakeCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn autofix(&self) -> bool {
        self.autofix
    }

    fn diagnose(&self) -> DiagnosticResult {
        self.diagnose_calls.set(self.diagnose_calls.get() + 1);
        let mut results = self.results.borrow_mut();
        if results.len() > 1 {
            results.pop_front().unwrap()
        } else {
            results.front().cloned().unwrap()
        }
    }

    fn fix(&self) -> Result<FixOutcome, FixError> {
        self.fix_calls.set(self.fix_calls.get() + 1);
        match &self.fix {
            FakeFix::Instruction(text) => Ok(FixOutcome::Instruction(text.clone())),
            FakeFix::Apply => Ok(FixOutcome::Applied),
            FakeFix::Skip(reason) => Err(FixError::skipped(reason.clone())),
            FakeFix::Fail(message) => Err(FixError::Failed(anyhow::anyhow!(message.clone()))),
            FakeFix::Unsupported => Err(FixError::Unsupported),
        }
    }
}
