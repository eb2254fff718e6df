//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App, InputMode};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(app, key),
        Event::Tick => {
            app.tick(Instant::now());
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Search => handle_search_key(app, key),
        // Editing only happens inside a dialog
        InputMode::Editing => {
            app.input_mode = InputMode::Normal;
            Ok(())
        }
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    app.clear_status();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('/') | KeyCode::Char('s') => app.input_mode = InputMode::Search,
        KeyCode::Char('a') => app.open_dialog(ActiveDialog::AddContact),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('r') => {
            app.refresh();
            app.set_status("Refreshed");
        }
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Esc => app.clear_search(),
        _ => {}
    }
    Ok(())
}

/// Handle keys while typing in the search bar
fn handle_search_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let edited = match key.code {
        KeyCode::Enter => {
            app.refresh();
            app.input_mode = InputMode::Normal;
            false
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            false
        }
        KeyCode::Down => {
            app.select_next();
            false
        }
        KeyCode::Up => {
            app.select_prev();
            false
        }
        KeyCode::Left => {
            app.search_input.move_left();
            false
        }
        KeyCode::Right => {
            app.search_input.move_right();
            false
        }
        KeyCode::Home => {
            app.search_input.move_start();
            false
        }
        KeyCode::End => {
            app.search_input.move_end();
            false
        }
        KeyCode::Backspace => app.search_input.backspace(),
        KeyCode::Delete => app.search_input.delete(),
        KeyCode::Char(c) => {
            app.search_input.insert(c);
            true
        }
        _ => false,
    };

    if edited {
        app.search_edited(Instant::now());
    }
    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog.clone() {
        ActiveDialog::None => {}
        ActiveDialog::AddContact => dialogs::add_contact::handle_key(app, key)?,
        ActiveDialog::ConfirmDelete(name) => dialogs::confirm::handle_key(app, &name, key)?,
    }
    Ok(())
}
