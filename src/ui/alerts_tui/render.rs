use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use super::app::AlertsApp;
use super::event_handler::Focus;
use super::widgets::{button, severity_color, spinner_frame};
use crate::core::{AlertSource, ViewState};

/// Main render function
pub fn render_ui<C: AlertSource>(frame: &mut Frame, app: &AlertsApp<C>) {
    let area = frame.area();
    // Snapshot so the lock is not held while drawing
    let state = app.surface.lock().clone();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Input + button
            Constraint::Length(1), // Loading / error line
            Constraint::Min(3),    // Alerts
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_title(frame, chunks[0]);
    render_input_row(frame, chunks[1], app, &state);
    render_status_line(frame, chunks[2], app, &state);
    render_alerts(frame, chunks[3], &state);
    render_footer(frame, chunks[4]);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(" Weather Alerts (api.weather.gov) ")
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    frame.render_widget(title, area);
}

fn render_input_row<C: AlertSource>(
    frame: &mut Frame,
    area: Rect,
    app: &AlertsApp<C>,
    state: &ViewState,
) {
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(16)])
        .split(area);

    let input_focused = app.focus == Focus::Input;
    let border_style = if input_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let input = Paragraph::new(state.input.as_str()).block(
        Block::default()
            .title(" State (e.g. FL) ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(input, row[0]);

    if input_focused && !app.show_help {
        frame.set_cursor_position(input_cursor(row[0], &state.input));
    }

    frame.render_widget(button("Get Alerts", app.focus == Focus::Button), row[1]);
}

/// Cursor after the last typed character, kept inside the input border
fn input_cursor(area: Rect, input: &str) -> (u16, u16) {
    let typed = u16::try_from(input.chars().count()).unwrap_or(u16::MAX);
    let cursor_x = area.x.saturating_add(1).saturating_add(typed);
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    (cursor_x.min(max_x), area.y.saturating_add(1))
}

fn render_status_line<C: AlertSource>(
    frame: &mut Frame,
    area: Rect,
    app: &AlertsApp<C>,
    state: &ViewState,
) {
    let mut spans = Vec::new();
    if state.loading {
        spans.push(Span::styled(
            format!(" {} Loading...", spinner_frame(app.tick)),
            Style::default().fg(Color::Yellow),
        ));
    }
    if let Some(message) = state.visible_error() {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }
    let line = Line::from(spans);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_alerts(frame: &mut Frame, area: Rect, state: &ViewState) {
    let title = match &state.summary {
        Some(summary) => format!(" {} ", summary),
        None => " Alerts ".to_string(),
    };

    let block = Block::default().title(title).borders(Borders::ALL);

    if state.rendered_alerts.is_empty() {
        let hint = Paragraph::new("Enter a state abbreviation and press Enter.")
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = state
        .rendered_alerts
        .iter()
        .map(|alert| {
            let color = severity_color(alert.severity);
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!("{:<9}", alert.severity.label()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(alert.text.clone()),
            ])];
            if let Some(detail) = &alert.detail {
                lines.push(Line::from(Span::styled(
                    format!("{:<9}{}", "", detail),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let help = " Enter: Get alerts │ Tab: Focus button │ Ctrl+U: Clear │ F1: Help │ Esc: Quit ";
    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let help_text = r#"
    WXA Weather Alerts - Help

    Keyboard Shortcuts:
    ─────────────────────────────────────
    Enter       Fetch alerts for the typed state
    Tab         Move focus to/from the button
    Space       Press the button when focused
    Backspace   Delete a character
    Ctrl+U      Clear the input
    F1          Toggle this help screen
    Esc         Quit the application

    Press any key to close this help
    "#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::DarkGray));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left);

    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(paragraph, popup_area);
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
