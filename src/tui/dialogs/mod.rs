//! Dialog components for the TUI

pub mod add_contact;
pub mod confirm;

pub use add_contact::{AddContactForm, ContactField};
