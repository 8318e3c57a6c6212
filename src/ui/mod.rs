//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait, the sink every report line goes through
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] which captures everything for tests
//! - [`OutputMode`] and the report [`Level`]s it filters
//!
//! # Example
//!
//! ```
//! use envdoctor::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("My App");
//! ui.success("No issues found");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI, UiEvent};
pub use non_interactive::NonInteractiveUI;
pub use output::{Level, OutputMode};
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::DoctorTheme;

/// Trait for user interface interactions.
///
/// The doctor reports progress only through this trait, so tests can
/// substitute a [`MockUI`] and assert on the exact sequence of lines.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode (e.g. from configuration defaults).
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Display an informational message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display output captured from a failing check, beneath its result.
    fn detail(&mut self, msg: &str);

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a contextual hint.
    fn show_hint(&mut self, hint: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle to a transient spinner.
pub trait SpinnerHandle {
    /// Remove the spinner without leaving a line behind.
    fn clear(&mut self);
}
