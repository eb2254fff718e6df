//! Terminal User Interface module
//!
//! A single-screen contact browser built on ratatui: a search bar with
//! debounced live search, the contact table, and dialogs for adding and
//! deleting contacts.

pub mod app;
pub mod debounce;
pub mod event;
pub mod handler;
pub mod terminal;

pub mod views;

pub mod widgets;

pub mod dialogs;

pub mod layout;

pub use app::App;
pub use terminal::run_tui;
