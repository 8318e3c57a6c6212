//! Shell command execution.

use std::path::Path;
use std::process::{Command, Stdio};

use super::platform::{shell_executable, shell_flag};
use crate::error::{DoctorError, Result};

/// Captured outcome of a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Last non-empty line of stderr, falling back to stdout.
    ///
    /// Gives failure reports some context without dumping the whole output
    /// into a single line.
    pub fn last_output_line(&self) -> Option<&str> {
        fn pick(s: &str) -> Option<&str> { s.lines().rev().map(str::trim).find(|l| !l.is_empty()) }
        pick(&self.stderr).or_else(|| pick(&self.stdout))
    }

    /// How the command ended, e.g. `exited with code 2`.
    pub fn exit_description(&self) -> String {
        match self.exit_code {
            Some(code) => format!("exited with code {}", code),
            None => "was terminated by a signal".to_string(),
        }
    }
}

/// Run `command` through the user's shell with stdin closed and both output
/// streams captured.
///
/// Returns `Err(CommandFailed)` only when the shell itself could not be
/// started; a non-zero exit is reported through [`CommandResult::success`].
pub fn execute(command: &str, cwd: Option<&Path>) -> Result<CommandResult> {
    let shell = shell_executable();
    let mut cmd = Command::new(&shell);
    cmd.arg(shell_flag()).arg(command).stdin(Stdio::null());
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    tracing::debug!("Executing `{}` via {}", command, shell.display());

    let output = cmd.output().map_err(|source| DoctorError::CommandFailed {
        command: command.to_string(),
        source,
    })?;

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        success: output.status.success(),
    })
}
