//! Styling of report lines.

use console::{Style, Term};

use super::output::Level;

/// Styles for each report [`Level`].
///
/// Required failures are red, optional failures and unresolved fixes amber,
/// and output captured from failing checks is dimmed under its result.
#[derive(Debug, Clone)]
pub struct DoctorTheme {
    /// Passing checks and verified fixes.
    pub ok: Style,
    /// Optional failures.
    pub warn: Style,
    /// Required failures.
    pub fail: Style,
    /// Secondary text: captured output, list annotations.
    pub muted: Style,
    /// Check names and the report header.
    pub accent: Style,
    /// Follow-up hints.
    pub hint: Style,
}

impl Default for DoctorTheme {
    fn default() -> Self {
        Self::colored()
    }
}

impl DoctorTheme {
    /// Colored theme.
    pub fn colored() -> Self {
        Self {
            ok: Style::new().green(),
            warn: Style::new().color256(214),
            fail: Style::new().red().bold(),
            muted: Style::new().dim(),
            accent: Style::new().cyan().bold(),
            hint: Style::new().cyan().dim(),
        }
    }

    /// Theme without styling, for logs and `--no-color`.
    pub fn plain() -> Self {
        Self {
            ok: Style::new(),
            warn: Style::new(),
            fail: Style::new(),
            muted: Style::new(),
            accent: Style::new(),
            hint: Style::new(),
        }
    }

    /// Colored when `term` is a terminal and `NO_COLOR` is unset.
    pub fn for_term(term: &Term) -> Self {
        if term.is_term() && std::env::var_os("NO_COLOR").is_none() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Render one report line.
    pub fn render(&self, level: Level, msg: &str) -> String {
        match level {
            Level::Header => format!("\n{}\n", self.accent.apply_to(msg)),
            Level::Info => msg.to_string(),
            Level::Success => format!("{} {}", self.ok.apply_to("✓"), msg),
            Level::Warning => self.warn.apply_to(format!("⚠ {}", msg)).to_string(),
            Level::Error => self.fail.apply_to(format!("✗ {}", msg)).to_string(),
            Level::Detail => format!("    {}", self.muted.apply_to(format!("│ {}", msg))),
            Level::Hint => format!("\n  {}", self.hint.apply_to(msg)),
        }
    }
}
