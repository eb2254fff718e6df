//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::settings::Settings;
use crate::error::ContactError;
use crate::services::ContactService;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()
        .map_err(|e| ContactError::Tui(format!("Failed to enable raw mode: {}", e)))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| ContactError::Tui(format!("Failed to enter alternate screen: {}", e)))?;

    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(service: &mut ContactService, settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;
    let result = run_loop(&mut terminal, service, settings);
    restore_terminal()?;
    result
}

fn run_loop(terminal: &mut Tui, service: &mut ContactService, settings: &Settings) -> Result<()> {
    let mut app = App::new(service, settings);
    let events = EventHandler::default();
    tracing::info!(contacts = app.results.len(), "tui started");

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, &app))?;
        handle_event(&mut app, events.next()?)?;
    }

    tracing::info!("tui closed");
    Ok(())
}
