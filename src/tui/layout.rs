//! Layout definitions for the TUI
//!
//! Search bar on top, contact table in the middle, status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    pub search_bar: Rect,
    pub table: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Min(3),    // Contacts
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            search_bar: chunks[0],
            table: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
