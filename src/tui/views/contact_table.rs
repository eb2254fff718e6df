//! Contact table view

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::{App, InputMode};

/// Render the search results table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.search_input.value().trim().is_empty() {
        format!(" Contacts ({}) ", app.results.len())
    } else {
        format!(" Results ({}) ", app.results.len())
    };

    let border_color = if app.input_mode == InputMode::Normal {
        Color::Cyan
    } else {
        Color::White
    };

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if app.results.is_empty() {
        let text = Paragraph::new("No contacts found. Press 'a' to add one.")
            .style(Style::default().fg(Color::Yellow))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Percentage(35), // Name
        Constraint::Length(14),     // Phone
        Constraint::Min(20),        // Email
    ];

    let header = Row::new(vec![
        Cell::from("Name").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Phone").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Email").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .bottom_margin(1);

    let rows: Vec<Row> = app
        .results
        .iter()
        .map(|contact| {
            Row::new(vec![
                Cell::from(contact.name().to_string()),
                Cell::from(contact.phone().to_string()),
                Cell::from(contact.email().to_string()),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}
