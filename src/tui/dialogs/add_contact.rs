//! Add contact dialog
//!
//! Form with name, phone and email fields. Tab moves between fields,
//! Enter saves and Esc cancels.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::error::ContactError;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is focused in the add form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Phone,
    Email,
}

impl ContactField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Phone,
            Self::Phone => Self::Email,
            Self::Email => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Phone => Self::Name,
            Self::Email => Self::Phone,
        }
    }
}

/// State for the add contact form
#[derive(Debug, Clone)]
pub struct AddContactForm {
    pub focused_field: ContactField,
    pub name_input: TextInput,
    pub phone_input: TextInput,
    pub email_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for AddContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AddContactForm {
    pub fn new() -> Self {
        Self {
            focused_field: ContactField::Name,
            name_input: TextInput::new().label("Name ").placeholder("Full name"),
            phone_input: TextInput::new().label("Phone").placeholder("10 digits"),
            email_input: TextInput::new().label("Email").placeholder("name@example.com"),
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            ContactField::Name => &mut self.name_input,
            ContactField::Phone => &mut self.phone_input,
            ContactField::Email => &mut self.email_input,
        }
    }

    /// Current name, phone and email
    pub fn values(&self) -> (String, String, String) {
        (
            self.name_input.value().to_string(),
            self.phone_input.value().to_string(),
            self.email_input.value().to_string(),
        )
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Render the add contact dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Contact ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Phone
            Constraint::Length(1), // Email
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.add_form;
    let fields = [
        (ContactField::Name, &form.name_input),
        (ContactField::Phone, &form.phone_input),
        (ContactField::Email, &form.email_input),
    ];
    for (row, (field, input)) in fields.into_iter().enumerate() {
        let line = input.line(form.focused_field == field);
        frame.render_widget(Paragraph::new(line), chunks[row]);
    }

    if let Some(ref error) = form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[4],
        );
    }

    let buttons = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Next field  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(buttons), chunks[5]);
}

/// Handle key input for the add contact dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<(), ContactError> {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => app.submit_add_form()?,
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => app.add_form.prev_field(),
        KeyCode::Tab | KeyCode::Down => app.add_form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.add_form.prev_field(),
        KeyCode::Left => app.add_form.focused_input().move_left(),
        KeyCode::Right => app.add_form.focused_input().move_right(),
        KeyCode::Home => app.add_form.focused_input().move_start(),
        KeyCode::End => app.add_form.focused_input().move_end(),
        KeyCode::Backspace => {
            app.add_form.focused_input().backspace();
            app.add_form.clear_error();
        }
        KeyCode::Delete => {
            app.add_form.focused_input().delete();
            app.add_form.clear_error();
        }
        KeyCode::Char(c) => {
            app.add_form.focused_input().insert(c);
            app.add_form.clear_error();
        }
        _ => {}
    }
    Ok(())
}
