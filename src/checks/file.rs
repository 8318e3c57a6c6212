//! File presence checks.

use std::path::{Path, PathBuf};

use super::remedy::{FixContext, Remedy};
use super::{Check, DiagnosticResult, FixError, FixOutcome};

/// Check that passes when a file or directory exists.
#[derive(Debug, Clone)]
pub struct FileCheck {
    name: String,
    description: Option<String>,
    path: PathBuf,
    optional: bool,
    remedy: Remedy,
    ctx: FixContext,
}

impl FileCheck {
    /// Create a new file check. Relative paths resolve against the
    /// directory set with [`in_dir`](Self::in_dir).
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, remedy: Remedy) -> Self {
        Self {
            name: name.into(),
            description: None,
            path: path.into(),
            optional: false,
            remedy,
            ctx: FixContext::default(),
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

    /// Resolve the path and run the fix in this directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.ctx.cwd = Some(dir.into());
        self
    }

    /// Skip automatic fixes instead of running them.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.ctx.dry_run = dry_run;
        self
    }

    /// Path as resolved against the working directory.
    pub fn resolved_path(&self) -> PathBuf {
        match &self.ctx.cwd {
            Some(dir) if self.path.is_relative() => dir.join(&self.path),
            _ => self.path.clone(),
        }
    }

    fn label(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.name)
    }

    fn display_path(&self) -> &Path {
        &self.path
    }
}

impl Check for FileCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn autofix(&self) -> bool {
        self.remedy.is_automatic()
    }

    fn diagnose(&self) -> DiagnosticResult {
        let result = if self.resolved_path().exists() {
            DiagnosticResult::ok(self.label())
        } else {
            DiagnosticResult::failed(format!(
                "{}: {} not found",
                self.label(),
                self.display_path().display()
            ))
            .with_detail(format!("looked for {}", self.resolved_path().display()))
        };
        result.optional(self.optional)
    }

    fn fix(&self) -> Result<FixOutcome, FixError> {
        self.remedy.apply(&self.ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn existing_file_is_ok() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".env"), "A=1").unwrap();

        let check = FileCheck::new("dotenv", ".env", Remedy::Instructions("create it".into()))
            .in_dir(temp.path());

        assert!(check.diagnose().ok);
    }

    #[test]
    fn missing_file_reports_path() {
        let temp = TempDir::new().unwrap();
        let check = FileCheck::new("dotenv", ".env", Remedy::Instructions("create it".into()))
            .with_description("Environment file")
            .in_dir(temp.path());

        let result = check.diagnose();

        assert!(!result.ok);
        assert_eq!(result.message, "Environment file: .env not found");
        let detail = result.detail.unwrap();
        assert!(detail.starts_with("looked for "));
        assert!(detail.ends_with(".env"));
    }

    #[test]
    fn absolute_path_ignores_dir() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("abs.txt");
        fs::write(&file, "").unwrap();

        let check = FileCheck::new("abs", &file, Remedy::Instructions("x".into())).in_dir("/nope");

        assert_eq!(check.resolved_path(), file);
        assert!(check.diagnose().ok);
    }

    #[test]
    fn automatic_fix_creates_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".env.example"), "A=1").unwrap();

        let check = FileCheck::new(
            "dotenv",
            ".env",
            Remedy::Command("cp .env.example .env".into()),
        )
        .in_dir(temp.path());

        assert!(check.autofix());
        assert_eq!(check.fix().unwrap(), FixOutcome::Applied);
        assert!(check.diagnose().ok);
    }

    #[test]
    fn optional_file_check() {
        let temp = TempDir::new().unwrap();
        let check = FileCheck::new("hooks", ".git/hooks/pre-commit", Remedy::Instructions("x".into()))
            .optional(true)
            .in_dir(temp.path());

        let result = check.diagnose();
        assert!(!result.ok);
        assert!(result.optional);
    }
}
