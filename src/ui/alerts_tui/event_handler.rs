use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which control has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Button,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Input => Focus::Button,
            Focus::Button => Focus::Input,
        }
    }
}

/// Events that can occur in the alerts TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertsEvent {
    /// Quit the application
    Quit,
    /// Toggle help overlay
    ToggleHelp,
    /// Move focus between the input and the button
    FocusNext,
    /// Press the "Get Alerts" button
    PressButton,
    /// Enter while the input has focus
    SubmitInput,
    /// Type a character into the input
    Insert(char),
    /// Delete the character before the cursor
    Backspace,
    /// Empty the input
    ClearInput,
    /// No action
    None,
}

/// Translate a key press into an app event for the focused control
pub fn map_key(key: KeyEvent, focus: Focus, show_help: bool) -> AlertsEvent {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => AlertsEvent::Quit,
            KeyCode::Char('u') => AlertsEvent::ClearInput,
            _ => AlertsEvent::None,
        };
    }

    if show_help {
        // Any key closes the overlay
        return AlertsEvent::ToggleHelp;
    }

    match (key.code, focus) {
        (KeyCode::Esc, _) => AlertsEvent::Quit,
        (KeyCode::F(1), _) => AlertsEvent::ToggleHelp,
        (KeyCode::Tab | KeyCode::BackTab, _) => AlertsEvent::FocusNext,
        (KeyCode::Enter, Focus::Input) => AlertsEvent::SubmitInput,
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Button) => AlertsEvent::PressButton,
        (KeyCode::Char('?'), Focus::Button) => AlertsEvent::ToggleHelp,
        (KeyCode::Char(c), Focus::Input) => AlertsEvent::Insert(c),
        (KeyCode::Backspace, Focus::Input) => AlertsEvent::Backspace,
        _ => AlertsEvent::None,
    }
}
