//! Text input widget
//!
//! A single-line text field. The cursor counts characters, not bytes, so
//! names with accents or other multi-byte characters edit correctly.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// A single-line text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position in characters
    cursor: usize,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create an empty text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content and move the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_len();
        self
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map_or(self.content.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.content.remove(at);
        true
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.content.remove(at);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Build a styled line: label, value and, when focused, a block cursor
    pub fn line(&self, focused: bool) -> Line<'static> {
        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let value_style = Style::default().fg(Color::White);

        let mut spans = Vec::new();
        if !self.label.is_empty() {
            spans.push(Span::styled(format!("{}: ", self.label), label_style));
        }

        if !focused {
            if self.content.is_empty() {
                spans.push(Span::styled(
                    self.placeholder.clone(),
                    Style::default().fg(Color::DarkGray),
                ));
            } else {
                spans.push(Span::styled(self.content.clone(), value_style));
            }
            return Line::from(spans);
        }

        let split = self.byte_offset(self.cursor);
        let (before, after) = self.content.split_at(split);
        let mut rest = after.chars();
        let cursor_char = rest.next().unwrap_or(' ');

        spans.push(Span::styled(before.to_string(), value_style));
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::styled(rest.as_str().to_string(), value_style));

        Line::from(spans)
    }
}
