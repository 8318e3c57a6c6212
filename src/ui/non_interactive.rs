//! Plain-line UI for CI logs and redirected output.

use std::io::{self, Write};

use super::{DoctorTheme, Level, OutputMode, ProgressSpinner, SpinnerHandle, UserInterface};

/// Unstyled report lines without animation.
///
/// Warnings and errors are written to the error stream, everything else to
/// the output stream. Verbose runs also log each "Checking ..." step.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: DoctorTheme,
    out: Box<dyn Write>,
    err: Box<dyn Write>,
}

impl NonInteractiveUI {
    /// Write to stdout and stderr.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_writers(mode, Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Write to the given streams.
    pub fn with_writers(mode: OutputMode, out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        Self {
            mode,
            theme: DoctorTheme::plain(),
            out,
            err,
        }
    }

    fn emit(&mut self, level: Level, msg: &str) {
        if !self.mode.shows(level) {
            return;
        }
        let line = self.theme.render(level, msg);
        let stream = if level.is_problem() {
            &mut self.err
        } else {
            &mut self.out
        };
        writeln!(stream, "{}", line).ok();
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        self.emit(Level::Info, msg);
    }

    fn success(&mut self, msg: &str) {
        self.emit(Level::Success, msg);
    }

    fn warning(&mut self, msg: &str) {
        self.emit(Level::Warning, msg);
    }

    fn error(&mut self, msg: &str) {
        self.emit(Level::Error, msg);
    }

    fn detail(&mut self, msg: &str) {
        self.emit(Level::Detail, msg);
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode == OutputMode::Verbose {
            writeln!(self.out, "{}", message).ok();
        }
        Box::new(ProgressSpinner::hidden())
    }

    fn show_header(&mut self, title: &str) {
        self.emit(Level::Header, title);
    }

    fn show_hint(&mut self, hint: &str) {
        self.emit(Level::Hint, hint);
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
