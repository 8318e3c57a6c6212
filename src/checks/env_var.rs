//! Environment variable checks.

use super::remedy::Remedy;
use super::{Check, DiagnosticResult, FixError, FixOutcome};

/// Check that passes when an environment variable is set and non-empty.
///
/// A child process cannot change its parent's environment, so these checks
/// are always manual.
#[derive(Debug, Clone)]
pub struct EnvVarCheck {
    name: String,
    description: Option<String>,
    var: String,
    optional: bool,
    instructions: String,
}

impl EnvVarCheck {
    /// Create a new environment variable check.
    pub fn new(
        name: impl Into<String>,
        var: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            var: var.into(),
            optional: false,
            instructions: instructions.into(),
        }
    }

    /// Set the label used in report lines.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Report failures of this check as optional.
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// The variable this check looks at.
    pub fn var(&self) -> &str {
        &self.var
    }

    fn label(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.name)
    }
}

impl Check for EnvVarCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn autofix(&self) -> bool {
        false
    }

    fn diagnose(&self) -> DiagnosticResult {
        let result = match std::env::var(&self.var) {
            Ok(value) if !value.trim().is_empty() => DiagnosticResult::ok(self.label()),
            Ok(_) => DiagnosticResult::failed(format!("{}: {} is empty", self.label(), self.var)),
            Err(_) => {
                DiagnosticResult::failed(format!("{}: {} is not set", self.label(), self.var))
            }
        };
        result.optional(self.optional)
    }

    fn fix(&self) -> Result<FixOutcome, FixError> {
        Remedy::Instructions(self.instructions.clone()).apply(&Default::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_variable_is_ok() {
        let check = EnvVarCheck::new("path", "PATH", "set PATH");
        assert!(check.diagnose().ok);
    }

    #[test]
    fn unset_variable_fails() {
        let check = EnvVarCheck::new(
            "token",
            "ENVDOCTOR_TEST_SURELY_UNSET_VARIABLE",
            "export it",
        )
        .with_description("API token");

        let result = check.diagnose();

        assert!(!result.ok);
        assert_eq!(
            result.message,
            "API token: ENVDOCTOR_TEST_SURELY_UNSET_VARIABLE is not set"
        );
    }

    #[test]
    fn env_checks_are_manual() {
        let check = EnvVarCheck::new("token", "TOKEN", "export TOKEN=abc");
        assert!(!check.autofix());
        assert_eq!(
            check.fix().unwrap(),
            FixOutcome::Instruction("export TOKEN=abc".into())
        );
    }

    #[test]
    fn optional_flag_is_carried() {
        let check =
            EnvVarCheck::new("editor", "ENVDOCTOR_TEST_SURELY_UNSET_EDITOR", "set it").optional(true);
        assert!(check.diagnose().optional);
    }
}
