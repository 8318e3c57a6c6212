//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - Check names must be non-empty and unique
//! - Each check declares exactly one of `fix` or `instructions`
//! - Neither `fix` nor `instructions` may be blank
//! - Environment variable checks cannot be fixed automatically
//! - Target fields (`command`, `path`, `var`) must not be blank

use crate::config::schema::{CheckConfig, CheckKind, DoctorConfig};
use crate::error::{DoctorError, Result};
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Check name if error is check-specific
    pub check: Option<String>,
}

impl ValidationError {
    fn for_check(rule: &str, check: &CheckConfig, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            check: Some(check.name.clone()),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &DoctorConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_names(config));
    for check in &config.checks {
        errors.extend(validate_target(check));
        errors.extend(validate_remedy(check));
    }

    errors
}

/// Validate check names.
fn validate_names(config: &DoctorConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, check) in config.checks.iter().enumerate() {
        if check.name.trim().is_empty() {
            errors.push(ValidationError {
                rule: "empty-name".to_string(),
                message: format!("Check #{} has an empty name", index + 1),
                check: None,
            });
        } else if !seen.insert(check.name.as_str()) {
            errors.push(ValidationError::for_check(
                "duplicate-name",
                check,
                format!("Check '{}' is defined more than once", check.name),
            ));
        }
    }

    errors
}

/// Validate the target fields of a check.
fn validate_target(check: &CheckConfig) -> Option<ValidationError> {
    let blank = match &check.kind {
        CheckKind::Command { command } => command.trim().is_empty().then_some("command"),
        CheckKind::File { path } => path.as_os_str().is_empty().then_some("path"),
        CheckKind::Env { var } => var.trim().is_empty().then_some("var"),
    }?;

    Some(ValidationError::for_check(
        "empty-target",
        check,
        format!("Check '{}' has an empty '{}'", check.name, blank),
    ))
}

/// Validate how a check is remediated.
fn validate_remedy(check: &CheckConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    match (&check.fix, &check.instructions) {
        (Some(_), Some(_)) => errors.push(ValidationError::for_check(
            "ambiguous-remedy",
            check,
            format!(
                "Check '{}' must have either 'fix' or 'instructions', not both",
                check.name
            ),
        )),
        (None, None) => errors.push(ValidationError::for_check(
            "missing-remedy",
            check,
            format!(
                "Check '{}' must have either 'fix' or 'instructions'",
                check.name
            ),
        )),
        (Some(text), None) | (None, Some(text)) if text.trim().is_empty() => {
            let field = if check.fix.is_some() {
                "fix"
            } else {
                "instructions"
            };
            errors.push(ValidationError::for_check(
                "empty-remedy",
                check,
                format!("Check '{}' has an empty '{}'", check.name, field),
            ));
        }
        _ => {}
    }

    if matches!(check.kind, CheckKind::Env { .. }) && check.fix.is_some() {
        errors.push(ValidationError::for_check(
            "env-autofix",
            check,
            format!(
                "Check '{}' cannot use 'fix': environment variables can only be fixed manually",
                check.name
            ),
        ));
    }

    errors
}

/// Validate a configuration.
///
/// All error messages are joined into one `ConfigValidationError` so the
/// user sees every problem at once.
pub fn validate(config: &DoctorConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(DoctorError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
