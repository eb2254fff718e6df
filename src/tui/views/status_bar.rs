//! Status bar view
//!
//! Shows the contact count, the last status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(" Contacts: ", Style::default().fg(Color::White)),
        Span::styled(
            app.service.count().to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if app.search_pending() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled("searching…", Style::default().fg(Color::Cyan)));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match app.input_mode {
        InputMode::Search => " Enter:Search now  Esc:Done ",
        InputMode::Editing => " Tab:Next  Enter:Save  Esc:Cancel ",
        InputMode::Normal => " /:Search  a:Add  d:Delete  r:Refresh  q:Quit ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
