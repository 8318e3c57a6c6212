//! Check registry.
//!
//! The [`CheckRegistry`] keeps checks in registration order, which is the only
//! ordering the doctor guarantees. Checks are shared through `Rc` so fix
//! candidates can refer back to the check that produced them.

use std::rc::Rc;

use super::Check;

/// Ordered collection of checks for one doctor run.
///
/// Checks start in the main list. A check whose diagnosis reports itself as
/// optional is moved to the optional group and stays there for the rest of
/// the process.
#[derive(Default)]
pub struct CheckRegistry {
    checks: Vec<Rc<dyn Check>>,
    optional: Vec<Rc<dyn Check>>,
}

impl CheckRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single check.
    pub fn register(&mut self, check: impl Check + 'static) -> &mut Self {
        self.checks.push(Rc::new(check));
        self
    }

    /// Register an already shared check.
    ///
    /// Registering the same check twice runs it twice; there is no
    /// deduplication.
    pub fn register_shared(&mut self, check: Rc<dyn Check>) -> &mut Self {
        self.checks.push(check);
        self
    }

    /// Register an ordered sequence of checks.
    pub fn register_all<I>(&mut self, checks: I) -> &mut Self
    where
        I: IntoIterator<Item = Rc<dyn Check>>,
    {
        self.checks.extend(checks);
        self
    }

    /// Checks still treated as required, in registration order.
    pub fn checks(&self) -> &[Rc<dyn Check>] {
        &self.checks
    }

    /// Checks discovered to be optional, in discovery order.
    pub fn optional_checks(&self) -> &[Rc<dyn Check>] {
        &self.optional
    }

    /// Total number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len() + self.optional.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty() && self.optional.is_empty()
    }

    /// Take the main list out for a diagnosis pass.
    pub(crate) fn take_checks(&mut self) -> Vec<Rc<dyn Check>> {
        std::mem::take(&mut self.checks)
    }

    /// Put the (possibly shrunk) main list back after a diagnosis pass.
    pub(crate) fn restore_checks(&mut self, checks: Vec<Rc<dyn Check>>) {
        self.checks = checks;
    }

    /// Move a check into the optional group.
    pub(crate) fn push_optional(&mut self, check: Rc<dyn Check>) {
        self.optional.push(check);
    }
}

impl std::fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckRegistry")
            .field("checks", &self.checks.iter().map(|c| c.name()).collect::<Vec<_>>())
            .field(
                "optional",
                &self.optional.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::DiagnosticResult;

    struct Named(&'static str);

    impl Check for Named {
        fn name(&self) -> &str {
            self.0
        }
        fn autofix(&self) -> bool {
            false
        }
        fn diagnose(&self) -> DiagnosticResult {
            DiagnosticResult::ok(self.0)
        }
    }

    fn names(checks: &[Rc<dyn Check>]) -> Vec<&str> {
        checks.iter().map(|c| c.name()).collect()
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = CheckRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn register_preserves_order() {
        let mut registry = CheckRegistry::new();
        registry.register(Named("a")).register(Named("b"));
        registry.register_all(vec![
            Rc::new(Named("c")) as Rc<dyn Check>,
            Rc::new(Named("d")) as Rc<dyn Check>,
        ]);

        assert_eq!(names(registry.checks()), vec!["a", "b", "c", "d"]);
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn registering_same_check_twice_keeps_both() {
        let shared: Rc<dyn Check> = Rc::new(Named("dup"));
        let mut registry = CheckRegistry::new();
        registry.register_shared(shared.clone());
        registry.register_shared(shared);

        assert_eq!(names(registry.checks()), vec!["dup", "dup"]);
    }

    #[test]
    fn optional_group_counts_toward_len() {
        let mut registry = CheckRegistry::new();
        registry.register(Named("a"));
        registry.push_optional(Rc::new(Named("b")));

        assert_eq!(registry.len(), 2);
        assert_eq!(names(registry.optional_checks()), vec!["b"]);
    }

    #[test]
    fn debug_lists_names() {
        let mut registry = CheckRegistry::new();
        registry.register(Named("node"));
        assert!(format!("{:?}", registry).contains("node"));
    }
}
