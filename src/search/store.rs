//! In-memory contact collection
//!
//! The ordered source of truth the prefix index is built from. The store does
//! not validate or deduplicate; that belongs to the caller.

use crate::models::Contact;

/// Ordered collection of contacts
pub trait ContactStore {
    /// Append a contact
    fn add(&mut self, contact: Contact);

    /// Remove every contact whose name matches `name` ignoring case
    ///
    /// Returns the removed contacts in their original order.
    fn remove(&mut self, name: &str) -> Vec<Contact>;

    /// All contacts in insertion order
    fn list(&self) -> &[Contact];

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

/// `Vec`-backed [`ContactStore`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryContactStore {
    contacts: Vec<Contact>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<Vec<Contact>> for MemoryContactStore {
    fn from(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }
}

impl ContactStore for MemoryContactStore {
    fn add(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    fn remove(&mut self, name: &str) -> Vec<Contact> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.contacts)
            .into_iter()
            .partition(|contact| contact.matches_name(name));
        self.contacts = kept;
        removed
    }

    fn list(&self) -> &[Contact] {
        &self.contacts
    }
}
