//! Recording UI for tests.
//!
//! [`MockUI`] records every report line as a [`UiEvent`], in order, so
//! tests can assert on exactly what a run printed.
//!
//! # Example
//!
//! ```
//! use envdoctor::ui::{MockUI, UiEvent, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! ui.message("Checking environment");
//! ui.success("No issues found");
//!
//! assert!(ui.has_message("Checking"));
//! assert_eq!(
//!     ui.events().last(),
//!     Some(&UiEvent::Success("No issues found".to_string()))
//! );
//! ```

use super::{OutputMode, SpinnerHandle, UserInterface};

/// A single captured UI interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// `message()`
    Message(String),
    /// `success()`
    Success(String),
    /// `warning()`
    Warning(String),
    /// `error()`
    Error(String),
    /// `detail()`
    Detail(String),
    /// `show_header()`
    Header(String),
    /// `show_hint()`
    Hint(String),
    /// `start_spinner()`
    Spinner(String),
}

/// [`UserInterface`] that records instead of printing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    events: Vec<UiEvent>,
}

impl MockUI {
    /// Recorder in normal mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Recorder reporting `mode` as its output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Value returned by `is_interactive`.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Every captured interaction, in order.
    pub fn events(&self) -> &[UiEvent] {
        &self.events
    }

    fn collect(&self, pick: impl Fn(&UiEvent) -> Option<&String>) -> Vec<String> {
        self.events.iter().filter_map(pick).cloned().collect()
    }

    /// Lines passed to `message`.
    pub fn messages(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Message(m) => Some(m),
            _ => None,
        })
    }

    /// Lines passed to `success`.
    pub fn successes(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Success(m) => Some(m),
            _ => None,
        })
    }

    /// Lines passed to `warning`.
    pub fn warnings(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Warning(m) => Some(m),
            _ => None,
        })
    }

    /// Lines passed to `error`.
    pub fn errors(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Error(m) => Some(m),
            _ => None,
        })
    }

    /// Lines passed to `detail`.
    pub fn details(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Detail(m) => Some(m),
            _ => None,
        })
    }

    /// Titles passed to `show_header`.
    pub fn headers(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Header(m) => Some(m),
            _ => None,
        })
    }

    /// Lines passed to `show_hint`.
    pub fn hints(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Hint(m) => Some(m),
            _ => None,
        })
    }

    /// Spinner labels, in start order.
    pub fn spinners(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Spinner(m) => Some(m),
            _ => None,
        })
    }

    /// True if any message contains `msg`.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages().iter().any(|m| m.contains(msg))
    }

    /// True if any success line contains `msg`.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes().iter().any(|m| m.contains(msg))
    }

    /// True if any warning contains `msg`.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings().iter().any(|m| m.contains(msg))
    }

    /// True if any error contains `msg`.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors().iter().any(|m| m.contains(msg))
    }

    /// True if any hint contains `msg`.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints().iter().any(|m| m.contains(msg))
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        self.events.push(UiEvent::Message(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.events.push(UiEvent::Success(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.events.push(UiEvent::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.events.push(UiEvent::Error(msg.to_string()));
    }

    fn detail(&mut self, msg: &str) {
        self.events.push(UiEvent::Detail(msg.to_string()));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.events.push(UiEvent::Spinner(message.to_string()));
        Box::new(MockSpinner)
    }

    fn show_header(&mut self, title: &str) {
        self.events.push(UiEvent::Header(title.to_string()));
    }

    fn show_hint(&mut self, hint: &str) {
        self.events.push(UiEvent::Hint(hint.to_string()));
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Spinner returned by [`MockUI::start_spinner`]; its start is recorded as
/// [`UiEvent::Spinner`].
#[derive(Debug, Default)]
pub struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();

        ui.message("Hello");
        ui.success("Done");
        ui.warning("hooks missing");
        ui.error("Oops");

        assert_eq!(ui.messages(), vec!["Hello"]);
        assert_eq!(ui.successes(), vec!["Done"]);
        assert_eq!(ui.warnings(), vec!["hooks missing"]);
        assert_eq!(ui.errors(), vec!["Oops"]);
    }

    #[test]
    fn mock_ui_keeps_event_order() {
        let mut ui = MockUI::new();

        ui.error("first");
        ui.message("second");
        ui.success("third");

        assert_eq!(
            ui.events(),
            &[
                UiEvent::Error("first".into()),
                UiEvent::Message("second".into()),
                UiEvent::Success("third".into()),
            ]
        );
    }

    #[test]
    fn mock_ui_captures_headers_hints_and_spinners() {
        let mut ui = MockUI::new();

        ui.show_header("Doctor");
        ui.show_hint("Run again");
        let mut spinner = ui.start_spinner("Checking node");
        spinner.clear();

        assert_eq!(ui.headers(), vec!["Doctor"]);
        assert!(ui.has_hint("again"));
        assert_eq!(ui.spinners(), vec!["Checking node"]);
    }

    #[test]
    fn mock_ui_has_helpers_match_substrings() {
        let mut ui = MockUI::new();
        ui.warning("node is still failing");
        assert!(ui.has_warning("still failing"));
        assert!(!ui.has_error("still failing"));
    }

    #[test]
    fn mock_ui_output_mode() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
        ui.set_output_mode(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn mock_ui_interactive_flag() {
        let mut ui = MockUI::new();
        assert!(!ui.is_interactive());
        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }

    #[test]
    fn mock_ui_clear() {
        let mut ui = MockUI::new();
        ui.message("x");
        ui.clear();
        assert!(ui.events().is_empty());
    }

    #[test]
    fn mock_ui_captures_details() {
        let mut ui = MockUI::new();
        ui.error("node missing");
        ui.detail("node: command not found");

        assert_eq!(ui.details(), vec!["node: command not found"]);
        assert_eq!(
            ui.events()[1],
            UiEvent::Detail("node: command not found".into())
        );
    }
}
