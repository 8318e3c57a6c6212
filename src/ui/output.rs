//! Output modes and the report levels they filter.

use std::str::FromStr;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Everything, including the output captured from failing checks.
    Verbose,
    /// Header, progress, per-check results and hints.
    #[default]
    Normal,
    /// Result lines only.
    Quiet,
    /// Errors only.
    Silent,
}

/// Kind of line written to the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Report header.
    Header,
    /// Plain report line (counts, instructions).
    Info,
    /// Passing check or verified fix.
    Success,
    /// Optional failure or unresolved fix.
    Warning,
    /// Required failure or failed fix.
    Error,
    /// Output captured from a failing check.
    Detail,
    /// Follow-up suggestion.
    Hint,
}

impl Level {
    /// Whether the line reports a problem and belongs on stderr.
    pub fn is_problem(self) -> bool {
        matches!(self, Level::Warning | Level::Error)
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            "silent" => Ok(Self::Silent),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl From<crate::config::OutputMode> for OutputMode {
    fn from(config_mode: crate::config::OutputMode) -> Self {
        match config_mode {
            crate::config::OutputMode::Verbose => Self::Verbose,
            crate::config::OutputMode::Normal => Self::Normal,
            crate::config::OutputMode::Quiet => Self::Quiet,
            crate::config::OutputMode::Silent => Self::Silent,
        }
    }
}

impl OutputMode {
    /// Whether lines of `level` are written in this mode.
    pub fn shows(self, level: Level) -> bool {
        match level {
            Level::Error => true,
            Level::Info | Level::Success | Level::Warning => self != Self::Silent,
            Level::Header | Level::Hint => matches!(self, Self::Verbose | Self::Normal),
            Level::Detail => self == Self::Verbose,
        }
    }

    /// Whether "Checking ..." and "Fixing ..." spinners are drawn.
    pub fn shows_spinners(self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
