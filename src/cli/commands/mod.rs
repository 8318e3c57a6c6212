//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and shares configuration loading.

pub mod dispatcher;
pub mod list;
pub mod run;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use std::path::Path;

use crate::config::{load_config, validate, DoctorConfig};
use crate::error::{DoctorError, Result};
use crate::ui::{OutputMode, UserInterface};

/// Exit code used when no configuration exists.
pub const EXIT_NO_CONFIG: i32 = 2;

/// Load and validate the project configuration for a command.
///
/// A missing configuration is reported through `ui` and yields `Ok(None)`;
/// the caller exits with [`EXIT_NO_CONFIG`]. The configured default output
/// mode is applied when no output flag was given.
pub(crate) fn load_for_command(
    project_root: &Path,
    config_override: Option<&Path>,
    ui: &mut dyn UserInterface,
) -> Result<Option<DoctorConfig>> {
    let config = match load_config(project_root, config_override) {
        Ok(c) => c,
        Err(DoctorError::ConfigNotFound { path }) => {
            tracing::debug!("No configuration at {}", path.display());
            ui.error("No configuration found. Create .envdoctor/config.yml first.");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    validate(&config)?;

    if let Some(mode) = config.settings.default_output {
        if ui.output_mode() == OutputMode::Normal {
            ui.set_output_mode(mode.into());
        }
    }

    Ok(Some(config))
}
