//! Run command implementation.
//!
//! The `envdoctor run` command diagnoses the environment and applies fixes.

use std::path::{Path, PathBuf};

use crate::checks::{build_checks, BuildOptions};
use crate::cli::args::RunArgs;
use crate::doctor::{Doctor, RunOutcome};
use crate::error::Result;
use crate::ui::{Level, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::{load_for_command, EXIT_NO_CONFIG};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }

    fn build_options(&self) -> BuildOptions {
        BuildOptions {
            project_root: self.project_root.clone(),
            dry_run: self.args.dry_run,
            only: self.args.only.clone(),
            skip: self.args.skip.clone(),
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) =
            load_for_command(&self.project_root, self.config_override.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(EXIT_NO_CONFIG));
        };

        let app_name = config.app_name.as_deref().unwrap_or("project");
        ui.show_header(&format!("Checking {}", app_name));

        if self.args.dry_run {
            ui.message("Running in dry-run mode - automatic fixes will not be executed");
        }

        let checks = build_checks(&config, &self.build_options())?;
        if checks.is_empty() {
            ui.warning("No checks to run");
            return Ok(CommandResult::success());
        }
        tracing::debug!("Running {} checks from {}", checks.len(), self.project_root.display());

        let mut doctor = Doctor::from_checks(checks);
        let outcome = doctor.run(ui)?;

        match &outcome {
            RunOutcome::AllClean => {}
            RunOutcome::ManualFixesPending { .. } => {
                ui.show_hint("Automatic fixes run once every manual fix is done.");
            }
            RunOutcome::AutoFixesAttempted { unresolved, .. }
                if !unresolved.is_empty() && !ui.output_mode().shows(Level::Detail) =>
            {
                ui.show_hint("Run with --verbose to see the output of failing checks.");
            }
            RunOutcome::AutoFixesAttempted { .. } => {}
        }

        Ok(CommandResult::from_exit_code(outcome.exit_code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_DIR;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), config).unwrap();
        temp
    }

    fn run(temp: &TempDir, args: RunArgs) -> (CommandResult, MockUI) {
        let cmd = RunCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn run_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = RunCommand::new(temp.path(), None, RunArgs::default());
        assert_eq!(cmd.project_root(), temp.path());
        assert!(!cmd.args().dry_run);
    }

    #[test]
    fn run_no_config() {
        let temp = TempDir::new().unwrap();
        let (result, ui) = run(&temp, RunArgs::default());

        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("No configuration found"));
    }

    #[test]
    fn run_clean_environment() {
        let temp = setup_project(
            r#"
app_name: shop
checks:
  - name: readme
    description: README present
    kind: file
    path: README.md
    instructions: write a README
"#,
        );
        fs::write(temp.path().join("README.md"), "# shop").unwrap();

        let (result, ui) = run(&temp, RunArgs::default());

        assert!(result.success);
        assert_eq!(ui.headers(), vec!["Checking shop"]);
        assert!(ui.has_success("README present"));
        assert!(ui.has_success("No issues found"));
    }

    #[test]
    fn run_manual_fix_pending() {
        let temp = setup_project(
            r#"
checks:
  - name: readme
    kind: file
    path: README.md
    instructions: write a README
"#,
        );

        let (result, ui) = run(&temp, RunArgs::default());

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_message("1 fix needed"));
        assert!(ui.has_message("  - write a README"));
        assert!(!temp.path().join("README.md").exists());
    }

    #[test]
    fn run_applies_automatic_fix() {
        let temp = setup_project(
            r#"
checks:
  - name: dotenv
    kind: file
    path: .env
    fix: touch .env
"#,
        );

        let (result, ui) = run(&temp, RunArgs::default());

        assert!(result.success, "events: {:?}", ui.events());
        assert!(temp.path().join(".env").exists());
        assert!(ui.has_success("Fixed dotenv"));
        assert!(ui.has_success("All automatic fixes applied"));
    }

    #[test]
    fn verbose_run_shows_failing_command_output() {
        let temp = setup_project(
            r#"
checks:
  - name: tool
    kind: command
    command: "echo tool-detail >&2; exit 1"
    fix: "true"
"#,
        );
        let execute = |mode: OutputMode| {
            let mut ui = MockUI::with_mode(mode);
            RunCommand::new(temp.path(), None, RunArgs::default())
                .execute(&mut ui)
                .unwrap();
            ui
        };

        let normal = execute(OutputMode::Normal);
        let verbose = execute(OutputMode::Verbose);

        assert!(normal.details().is_empty());
        assert!(normal.has_hint("--verbose"));
        // Once for the diagnosis, once for the re-check after the fix.
        assert_eq!(verbose.details(), vec!["tool-detail", "tool-detail"]);
        assert!(!verbose.has_hint("--verbose"));
        assert_ne!(normal.events(), verbose.events());
    }

    #[test]
    fn run_dry_run_skips_fixes() {
        let temp = setup_project(
            r#"
checks:
  - name: dotenv
    kind: file
    path: .env
    fix: touch .env
"#,
        );
        let args = RunArgs {
            dry_run: true,
            ..Default::default()
        };

        let (result, ui) = run(&temp, args);

        assert_eq!(result.exit_code, 1);
        assert!(!temp.path().join(".env").exists());
        assert!(ui.has_message("Skipped dotenv: would run: touch .env"));
    }

    #[test]
    fn run_only_filters_checks() {
        let temp = setup_project(
            r#"
checks:
  - name: missing
    kind: file
    path: nope.txt
    instructions: create nope.txt
  - name: shell
    kind: command
    command: exit 0
    instructions: fix your shell
"#,
        );
        let args = RunArgs {
            only: vec!["shell".into()],
            ..Default::default()
        };

        let (result, _ui) = run(&temp, args);

        assert!(result.success);
    }

    #[test]
    fn run_unknown_check_name_is_an_error() {
        let temp = setup_project(
            r#"
checks:
  - name: shell
    kind: command
    command: exit 0
    instructions: fix your shell
"#,
        );
        let cmd = RunCommand::new(
            temp.path(),
            None,
            RunArgs {
                skip: vec!["nope".into()],
                ..Default::default()
            },
        );
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).is_err());
    }

    #[test]
    fn run_invalid_config_is_an_error() {
        let temp = setup_project(
            r#"
checks:
  - name: shell
    kind: command
    command: exit 0
"#,
        );
        let cmd = RunCommand::new(temp.path(), None, RunArgs::default());
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(err.to_string().contains("shell"));
    }

    #[test]
    fn run_applies_config_default_output() {
        let temp = setup_project(
            r#"
settings:
  default_output: quiet
checks: []
"#,
        );

        let (result, ui) = run(&temp, RunArgs::default());

        assert!(result.success);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
        assert!(ui.has_warning("No checks to run"));
    }
}
