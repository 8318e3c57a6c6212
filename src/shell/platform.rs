//! Platform-specific shell selection and CI detection.

use std::env;
use std::path::PathBuf;

/// Variables set by the CI providers we recognise.
const CI_MARKERS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "BUILDKITE",
    "TRAVIS",
    "JENKINS_URL",
];

/// Shell used to run check and fix commands.
///
/// `$SHELL` on Unix and `%COMSPEC%` on Windows; an unset or blank variable
/// falls back to `/bin/sh` or `cmd.exe`.
pub fn shell_executable() -> PathBuf {
    let (var, fallback) = if cfg!(target_os = "windows") {
        ("COMSPEC", "cmd.exe")
    } else {
        ("SHELL", "/bin/sh")
    };
    env::var_os(var)
        .filter(|shell| !shell.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(fallback))
}

/// Flag that makes [`shell_executable`] run a single command string.
///
/// Unix shells run as a non-interactive login shell so that version
/// managers initialised from the profile are on PATH.
pub fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-lc"
    }
}

/// True when any known CI marker variable is present.
///
/// `main` uses this to fall back to plain, non-interactive output.
pub fn is_ci() -> bool {
    CI_MARKERS.iter().any(|var| env::var_os(var).is_some())
}
