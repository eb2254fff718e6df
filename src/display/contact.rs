//! Contact display formatting
//!
//! Formats contacts for terminal output as bordered tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::audit::AuditEntry;
use crate::models::Contact;

#[derive(Tabled)]
struct ContactRow<'a> {
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Phone")]
    phone: &'a str,
    #[tabled(rename = "Email")]
    email: &'a str,
}

/// Format contacts as an ASCII table, in the order given
pub fn format_contact_table(contacts: &[Contact]) -> String {
    let rows = contacts.iter().map(|c| ContactRow {
        name: c.name().trim(),
        phone: c.phone().trim(),
        email: c.email().trim(),
    });

    Table::new(rows).with(Style::ascii()).to_string()
}

/// Format the contact list, or a notice when there is nothing to show
pub fn format_contact_list(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found.".to_string();
    }

    format!(
        "{}\n{} contact{}",
        format_contact_table(contacts),
        contacts.len(),
        if contacts.len() == 1 { "" } else { "s" }
    )
}

/// Format audit entries one per line
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded.".to_string();
    }

    entries
        .iter()
        .map(AuditEntry::format_human_readable)
        .collect::<Vec<_>>()
        .join("\n")
}
