//! Display surface abstraction.
//!
//! The core writes to a display surface but never owns one. Hosts (the
//! terminal UI, the console printer, tests) hand a surface to the
//! controllers at construction time.

use std::sync::Arc;

use parking_lot::Mutex;

use super::severity::Severity;

/// Surface shared between the controllers and the host
pub type SharedSurface<S> = Arc<Mutex<S>>;

/// One rendered list item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedAlert {
    pub text: String,
    pub severity: Severity,
    /// Optional secondary line (event name / affected area)
    pub detail: Option<String>,
}

impl RenderedAlert {
    pub fn css_class(&self) -> &'static str {
        self.severity.css_class()
    }
}

/// What the core needs from its host environment: a text input, a
/// container for alerts, a container for error text and a loading
/// indicator.
pub trait DisplaySurface: Send + 'static {
    fn input_text(&self) -> String;
    fn set_input_text(&mut self, text: &str);

    fn set_loading_visible(&mut self, visible: bool);

    fn set_error_text(&mut self, text: &str);
    fn set_error_visible(&mut self, visible: bool);

    fn clear_alerts(&mut self);
    fn set_summary(&mut self, text: &str);
    fn set_alert_list(&mut self, items: Vec<RenderedAlert>);
}

/// In-memory display surface, drawn by the terminal UI each frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub input: String,
    pub loading: bool,
    pub error_message: String,
    pub error_visible: bool,
    pub summary: Option<String>,
    pub rendered_alerts: Vec<RenderedAlert>,
}

impl ViewState {
    pub fn shared() -> SharedSurface<Self> {
        Arc::new(Mutex::new(Self::default()))
    }

    pub fn with_input(input: &str) -> Self {
        Self {
            input: input.to_string(),
            ..Default::default()
        }
    }

    /// Error text if the error surface is currently visible
    pub fn visible_error(&self) -> Option<&str> {
        self.error_visible.then_some(self.error_message.as_str())
    }
}

impl DisplaySurface for ViewState {
    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn set_input_text(&mut self, text: &str) {
        self.input = text.to_string();
    }

    fn set_loading_visible(&mut self, visible: bool) {
        self.loading = visible;
    }

    fn set_error_text(&mut self, text: &str) {
        self.error_message = text.to_string();
    }

    fn set_error_visible(&mut self, visible: bool) {
        self.error_visible = visible;
    }

    fn clear_alerts(&mut self) {
        self.summary = None;
        self.rendered_alerts.clear();
    }

    fn set_summary(&mut self, text: &str) {
        self.summary = Some(text.to_string());
    }

    fn set_alert_list(&mut self, items: Vec<RenderedAlert>) {
        self.rendered_alerts = items;
    }
}
