//! TUI Views module
//!
//! The search bar, contact table and status bar, with dialogs drawn on top.

pub mod contact_table;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, App, InputMode};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_search_bar(frame, app, layout.search_bar);
    contact_table::render(frame, app, layout.table);
    status_bar::render(frame, app, layout.status_bar);

    match &app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::AddContact => dialogs::add_contact::render(frame, app),
        ActiveDialog::ConfirmDelete(name) => dialogs::confirm::render(frame, name),
    }
}

fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.input_mode == InputMode::Search;
    let border_color = if focused { Color::Cyan } else { Color::White };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let paragraph = Paragraph::new(app.search_input.line(focused)).block(block);
    frame.render_widget(paragraph, area);
}
