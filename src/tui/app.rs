//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::time::{Duration, Instant};

use crate::config::settings::Settings;
use crate::error::ContactError;
use crate::models::Contact;
use crate::services::ContactService;

use super::debounce::Debouncer;
use super::dialogs::add_contact::AddContactForm;
use super::widgets::TextInput;

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the search bar
    Search,
    /// Typing into a dialog form
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddContact,
    /// Confirm deleting every contact with this name
    ConfirmDelete(String),
}

/// Main application state
pub struct App<'a> {
    /// The contact service
    pub service: &'a mut ContactService,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Search bar
    pub search_input: TextInput,

    /// Contacts currently shown in the table
    pub results: Vec<Contact>,

    /// Selected row in the table
    pub selected_index: usize,

    /// Add contact form state
    pub add_form: AddContactForm,

    /// Status message to display
    pub status_message: Option<String>,

    debouncer: Debouncer,
}

impl<'a> App<'a> {
    /// Create the app and show every contact
    pub fn new(service: &'a mut ContactService, settings: &Settings) -> Self {
        let mut app = Self {
            service,
            should_quit: false,
            input_mode: InputMode::Normal,
            active_dialog: ActiveDialog::None,
            search_input: TextInput::new()
                .label("Search")
                .placeholder("name, phone or email (press /)"),
            results: Vec::new(),
            selected_index: 0,
            add_form: AddContactForm::new(),
            status_message: None,
            debouncer: Debouncer::new(Duration::from_millis(settings.search_debounce_ms)),
        };
        app.refresh();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Open a dialog; form dialogs switch to editing mode
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if dialog == ActiveDialog::AddContact {
            self.add_form = AddContactForm::new();
            self.input_mode = InputMode::Editing;
        }
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Re-run the current search now, dropping any pending debounce
    ///
    /// An empty search bar shows every contact.
    pub fn refresh(&mut self) {
        self.debouncer.cancel();
        self.results = self.service.search(self.search_input.value());
        self.clamp_selection();
    }

    /// Note an edit of the search bar; the search runs after the delay
    pub fn search_edited(&mut self, now: Instant) {
        self.debouncer.schedule(now);
    }

    pub fn search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Periodic update from the event loop
    pub fn tick(&mut self, now: Instant) {
        if self.debouncer.fire_if_due(now) {
            self.refresh();
        }
    }

    /// Empty the search bar and show everything
    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.refresh();
    }

    pub fn selected_contact(&self) -> Option<&Contact> {
        self.results.get(self.selected_index)
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.results.len() {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        if self.selected_index >= self.results.len() {
            self.selected_index = self.results.len().saturating_sub(1);
        }
    }

    /// Ask for confirmation before deleting the selected contact's name
    pub fn request_delete(&mut self) {
        match self.selected_contact() {
            Some(contact) => {
                let name = contact.name().to_string();
                self.open_dialog(ActiveDialog::ConfirmDelete(name));
            }
            None => self.set_status("No contact selected"),
        }
    }

    /// Delete every contact with `name`
    pub fn delete_contact(&mut self, name: &str) -> Result<(), ContactError> {
        let removed = self.service.delete(name)?;
        if removed.is_empty() {
            self.set_status(format!("No contact named '{}'", name));
        } else {
            self.set_status(format!("Deleted {} contact(s) named '{}'", removed.len(), name));
        }
        self.refresh();
        Ok(())
    }

    /// Validate and save the add form
    ///
    /// Validation problems stay in the form so the user can correct them;
    /// other errors are returned.
    pub fn submit_add_form(&mut self) -> Result<(), ContactError> {
        let (name, phone, email) = self.add_form.values();
        match self.service.add(&name, &phone, &email) {
            Ok(contact) => {
                self.close_dialog();
                self.set_status(format!("Added {}", contact.name()));
                self.refresh();
                Ok(())
            }
            Err(e @ (ContactError::Validation(_) | ContactError::Duplicate { .. })) => {
                self.add_form.set_error(e.to_string());
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::paths::ContactPaths;
    use crate::storage::Storage;
    use tempfile::TempDir;

    pub(crate) fn open_service() -> (TempDir, ContactService) {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(ContactPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let mut service = ContactService::open(storage, &Settings::default()).unwrap();
        service.add("Alice", "5551234567", "alice@x.com").unwrap();
        service.add("Bob", "5559876543", "bob@y.com").unwrap();
        service.add("Alfred", "5550001111", "alf@z.org").unwrap();
        (temp_dir, service)
    }

    fn names(app: &App) -> Vec<String> {
        app.results.iter().map(|c| c.name().to_string()).collect()
    }

    #[test]
    fn test_new_shows_all_contacts() {
        let (_temp, mut service) = open_service();
        let app = App::new(&mut service, &Settings::default());

        assert_eq!(names(&app), vec!["Alfred", "Alice", "Bob"]);
        assert_eq!(app.selected_index, 0);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_search_waits_for_debounce() {
        let (_temp, mut service) = open_service();
        let mut app = App::new(&mut service, &Settings::default());
        let start = Instant::now();

        app.search_input.insert('a');
        app.search_input.insert('l');
        app.search_edited(start);

        app.tick(start + Duration::from_millis(500));
        assert_eq!(app.results.len(), 3);
        assert!(app.search_pending());

        app.tick(start + Duration::from_millis(1000));
        assert_eq!(names(&app), vec!["Alfred", "Alice"]);
        assert!(!app.search_pending());
    }

    #[test]
    fn test_clear_search_shows_everything() {
        let (_temp, mut service) = open_service();
        let mut app = App::new(&mut service, &Settings::default());

        app.search_input = TextInput::new().content("bob");
        app.refresh();
        assert_eq!(names(&app), vec!["Bob"]);

        app.clear_search();
        assert_eq!(app.results.len(), 3);
    }

    #[test]
    fn test_selection_is_clamped() {
        let (_temp, mut service) = open_service();
        let mut app = App::new(&mut service, &Settings::default());

        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected_index, 2);

        app.search_input = TextInput::new().content("al");
        app.refresh();
        assert_eq!(app.selected_index, 1);

        app.select_prev();
        app.select_prev();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_delete_flow() {
        let (_temp, mut service) = open_service();
        let mut app = App::new(&mut service, &Settings::default());

        app.select_next();
        app.request_delete();
        assert_eq!(
            app.active_dialog,
            ActiveDialog::ConfirmDelete("Alice".to_string())
        );

        app.close_dialog();
        app.delete_contact("Alice").unwrap();
        assert_eq!(names(&app), vec!["Alfred", "Bob"]);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Deleted 1 contact(s) named 'Alice'")
        );
    }

    #[test]
    fn test_request_delete_with_no_results() {
        let (_temp, mut service) = open_service();
        let mut app = App::new(&mut service, &Settings::default());

        app.search_input = TextInput::new().content("zzz");
        app.refresh();
        app.request_delete();

        assert!(!app.has_dialog());
        assert_eq!(app.status_message.as_deref(), Some("No contact selected"));
    }

    #[test]
    fn test_submit_add_form() {
        let (_temp, mut service) = open_service();
        let mut app = App::new(&mut service, &Settings::default());

        app.open_dialog(ActiveDialog::AddContact);
        assert_eq!(app.input_mode, InputMode::Editing);

        app.add_form.name_input = TextInput::new().content("carol king");
        app.add_form.phone_input = TextInput::new().content("5552223333");
        app.add_form.email_input = TextInput::new().content("carol@k.net");
        app.submit_add_form().unwrap();

        assert!(!app.has_dialog());
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(names(&app).contains(&"Carol King".to_string()));
    }

    #[test]
    fn test_submit_add_form_keeps_validation_error() {
        let (_temp, mut service) = open_service();
        let mut app = App::new(&mut service, &Settings::default());

        app.open_dialog(ActiveDialog::AddContact);
        app.add_form.name_input = TextInput::new().content("Dan");
        app.add_form.phone_input = TextInput::new().content("12");
        app.add_form.email_input = TextInput::new().content("dan@d.com");
        app.submit_add_form().unwrap();

        assert_eq!(app.active_dialog, ActiveDialog::AddContact);
        assert!(app
            .add_form
            .error_message
            .as_deref()
            .is_some_and(|m| m.contains("Invalid phone")));
        assert_eq!(app.results.len(), 3);
    }
}
