//! Configuration merging.
//!
//! Later configs override earlier ones. Checks are matched by name so a
//! local override can replace a single project check without repeating the
//! whole list.

use crate::config::schema::DoctorConfig;

/// Merge configs in order, later entries taking precedence.
pub fn merge_configs(configs: Vec<DoctorConfig>) -> DoctorConfig {
    configs
        .into_iter()
        .fold(DoctorConfig::default(), |base, overlay| merge(base, overlay))
}

/// Merge `overlay` on top of `base`.
///
/// - `app_name` and each setting are replaced when the overlay sets them
/// - a check whose name exists in `base` is replaced in place
/// - any other overlay check is appended
pub fn merge(mut base: DoctorConfig, overlay: DoctorConfig) -> DoctorConfig {
    if overlay.app_name.is_some() {
        base.app_name = overlay.app_name;
    }

    if overlay.settings.default_output.is_some() {
        base.settings.default_output = overlay.settings.default_output;
    }

    for check in overlay.checks {
        match base.checks.iter_mut().find(|c| c.name == check.name) {
            Some(existing) => *existing = check,
            None => base.checks.push(check),
        }
    }

    base
}
