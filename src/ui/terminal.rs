//! Interactive terminal UI.

use console::Term;

use super::{
    DoctorTheme, Level, NonInteractiveUI, OutputMode, ProgressSpinner, SpinnerHandle,
    UserInterface,
};

/// Styled output on the attached terminal with animated spinners.
///
/// Result and info lines go to stdout; warnings and errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: DoctorTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a terminal UI, styled unless stdout is redirected.
    pub fn new(mode: OutputMode) -> Self {
        let out = Term::stdout();
        Self {
            theme: DoctorTheme::for_term(&out),
            err: Term::stderr(),
            out,
            mode,
        }
    }

    fn emit(&self, level: Level, msg: &str) {
        if !self.mode.shows(level) {
            return;
        }
        let term = if level.is_problem() { &self.err } else { &self.out };
        term.write_line(&self.theme.render(level, msg)).ok();
    }
}

impl UserInterface for TerminalUI {
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
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        self.emit(Level::Header, title);
    }

    fn show_hint(&mut self, hint: &str) {
        self.emit(Level::Hint, hint);
    }

    fn is_interactive(&self) -> bool {
        self.out.is_term()
    }
}

/// Terminal UI when `interactive` and stdout is a terminal, plain lines
/// otherwise.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
