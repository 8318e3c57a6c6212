//! List command implementation.
//!
//! The `envdoctor list` command lists configured checks in run order.

use std::path::{Path, PathBuf};

use console::Term;
use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::config::{CheckConfig, DoctorConfig};
use crate::error::{DoctorError, Result};
use crate::ui::{DoctorTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::{load_for_command, EXIT_NO_CONFIG};

/// One row of `list --json` output.
#[derive(Debug, Serialize)]
struct CheckSummary<'a> {
    name: &'a str,
    kind: &'static str,
    optional: bool,
    autofix: bool,
}

impl<'a> From<&'a CheckConfig> for CheckSummary<'a> {
    fn from(check: &'a CheckConfig) -> Self {
        Self {
            name: &check.name,
            kind: check.kind.as_str(),
            optional: check.optional,
            autofix: check.is_automatic(),
        }
    }
}

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: ListArgs) -> Self {
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
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn show_json(&self, config: &DoctorConfig, ui: &mut dyn UserInterface) -> Result<()> {
        let rows: Vec<CheckSummary<'_>> = config.checks.iter().map(CheckSummary::from).collect();
        let json =
            serde_json::to_string_pretty(&rows).map_err(|e| DoctorError::Other(e.into()))?;
        ui.message(&json);
        Ok(())
    }

    fn show_table(&self, config: &DoctorConfig, ui: &mut dyn UserInterface) {
        let theme = DoctorTheme::for_term(&Term::stdout());

        ui.message(&format!("  {}", theme.accent.apply_to("Checks:")));
        for check in &config.checks {
            let importance = if check.optional { "optional" } else { "required" };
            let remedy = if check.is_automatic() { "automatic" } else { "manual" };
            ui.message(&format!(
                "    {} {}",
                theme.accent.apply_to(&check.name),
                theme.muted.apply_to(format!(
                    "({}, {}, {} fix)",
                    check.kind.as_str(),
                    importance,
                    remedy
                ))
            ));
            if let Some(description) = &check.description {
                ui.message(&format!("      {}", theme.muted.apply_to(description)));
            }
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) =
            load_for_command(&self.project_root, self.config_override.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(EXIT_NO_CONFIG));
        };

        if self.args.json {
            self.show_json(&config, ui)?;
        } else if config.checks.is_empty() {
            ui.warning("No checks configured");
        } else {
            self.show_table(&config, ui);
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_DIR;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    const CONFIG: &str = r#"
checks:
  - name: node
    description: Node.js installed
    kind: command
    command: node --version
    fix: brew install node
  - name: token
    kind: env
    var: API_TOKEN
    optional: true
    instructions: export API_TOKEN=...
"#;

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), config).unwrap();
        temp
    }

    #[test]
    fn list_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = ListCommand::new(temp.path(), None, ListArgs::default());
        assert_eq!(cmd.project_root(), temp.path());
        assert!(!cmd.args().json);
    }

    #[test]
    fn list_no_config() {
        let temp = TempDir::new().unwrap();
        let cmd = ListCommand::new(temp.path(), None, ListArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn list_shows_checks_in_order() {
        let temp = setup_project(CONFIG);
        let cmd = ListCommand::new(temp.path(), None, ListArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        let messages = ui.messages();
        let node = messages.iter().position(|m| m.contains("node")).unwrap();
        let token = messages.iter().position(|m| m.contains("token")).unwrap();
        assert!(node < token);
        assert!(ui.has_message("command, required, automatic fix"));
        assert!(ui.has_message("env, optional, manual fix"));
        assert!(ui.has_message("Node.js installed"));
    }

    #[test]
    fn list_json() {
        let temp = setup_project(CONFIG);
        let cmd = ListCommand::new(temp.path(), None, ListArgs { json: true });
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"name": "node", "kind": "command", "optional": false, "autofix": true},
                {"name": "token", "kind": "env", "optional": true, "autofix": false},
            ])
        );
    }

    #[test]
    fn list_empty_config_warns() {
        let temp = setup_project("checks: []\n");
        let cmd = ListCommand::new(temp.path(), None, ListArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_warning("No checks configured"));
    }

    #[test]
    fn list_applies_config_default_output() {
        let temp = setup_project("settings:\n  default_output: quiet\nchecks: []\n");
        let cmd = ListCommand::new(temp.path(), None, ListArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn list_respects_explicit_output_flag() {
        let temp = setup_project("settings:\n  default_output: quiet\nchecks: []\n");
        let cmd = ListCommand::new(temp.path(), None, ListArgs::default());
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
