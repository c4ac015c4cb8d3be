use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::core::Severity;

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Get color for an alert severity
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Severe => Color::Red,
        Severity::Moderate => Color::LightYellow,
        Severity::Minor => Color::Cyan,
        Severity::Unknown => Color::Gray,
    }
}

pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Bordered push button, highlighted when focused
pub fn button(label: &str, focused: bool) -> Paragraph<'_> {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}
