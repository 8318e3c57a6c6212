//! Construction of checks from configuration.

use std::path::PathBuf;
use std::rc::Rc;

use super::remedy::Remedy;
use super::{Check, CommandCheck, EnvVarCheck, FileCheck};
use crate::config::{CheckConfig, CheckKind, DoctorConfig};
use crate::error::{DoctorError, Result};

/// Options that apply to every check built from configuration.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Directory check commands and fixes run in.
    pub project_root: PathBuf,
    /// Skip automatic fixes instead of running them.
    pub dry_run: bool,
    /// Only build these checks (empty means all).
    pub only: Vec<String>,
    /// Never build these checks.
    pub skip: Vec<String>,
}

/// Build a single check from its configuration.
///
/// The configuration is expected to have passed validation; an
/// environment-variable check with a `fix` command is rejected here as well
/// since it can never be applied.
pub fn build_check(config: &CheckConfig, options: &BuildOptions) -> Result<Rc<dyn Check>> {
    let remedy = remedy_for(config)?;

    let check: Rc<dyn Check> = match &config.kind {
        CheckKind::Command { command } => {
            let mut check = CommandCheck::new(&config.name, command, remedy)
                .optional(config.optional)
                .in_dir(&options.project_root)
                .dry_run(options.dry_run);
            if let Some(description) = &config.description {
                check = check.with_description(description);
            }
            Rc::new(check)
        }
        CheckKind::File { path } => {
            let mut check = FileCheck::new(&config.name, path, remedy)
                .optional(config.optional)
                .in_dir(&options.project_root)
                .dry_run(options.dry_run);
            if let Some(description) = &config.description {
                check = check.with_description(description);
            }
            Rc::new(check)
        }
        CheckKind::Env { var } => {
            let Remedy::Instructions(instructions) = remedy else {
                return Err(DoctorError::ConfigValidationError {
                    message: format!(
                        "Check '{}' cannot use 'fix': environment variables can only be fixed manually",
                        config.name
                    ),
                });
            };
            let mut check =
                EnvVarCheck::new(&config.name, var, instructions).optional(config.optional);
            if let Some(description) = &config.description {
                check = check.with_description(description);
            }
            Rc::new(check)
        }
    };

    Ok(check)
}

/// Build the checks named by the configuration, in configuration order.
///
/// `only` and `skip` must name configured checks.
pub fn build_checks(config: &DoctorConfig, options: &BuildOptions) -> Result<Vec<Rc<dyn Check>>> {
    for name in options.only.iter().chain(options.skip.iter()) {
        if config.check(name).is_none() {
            return Err(DoctorError::ConfigValidationError {
                message: format!("Unknown check '{}'", name),
            });
        }
    }

    config
        .checks
        .iter()
        .filter(|c| options.only.is_empty() || options.only.contains(&c.name))
        .filter(|c| !options.skip.contains(&c.name))
        .map(|c| build_check(c, options))
        .collect()
}

fn remedy_for(config: &CheckConfig) -> Result<Remedy> {
    match (&config.fix, &config.instructions) {
        (Some(command), None) => Ok(Remedy::Command(command.clone())),
        (None, Some(text)) => Ok(Remedy::Instructions(text.clone())),
        _ => Err(DoctorError::ConfigValidationError {
            message: format!(
                "Check '{}' must have either 'fix' or 'instructions'",
                config.name
            ),
        }),
    }
}
