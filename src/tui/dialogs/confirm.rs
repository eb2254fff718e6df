//! Delete confirmation dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::error::ContactError;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Ask before deleting every contact called `name`
pub fn render(frame: &mut Frame, name: &str) {
    let area = centered_rect_fixed(50, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Delete Contact ")
        .title_style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("Delete all contacts named "),
            Span::styled(
                format!("'{}'", name),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("?"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Yes  "),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw(" No"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Handle y/n for a pending delete of `name`
pub fn handle_key(app: &mut App, name: &str, key: KeyEvent) -> Result<(), ContactError> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.close_dialog();
            app.delete_contact(name)?;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.close_dialog();
            app.set_status("Delete cancelled");
        }
        _ => {}
    }
    Ok(())
}
