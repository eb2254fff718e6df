//! Contact service
//!
//! Business logic around the search core: input validation, name casing,
//! persistence after every mutation and audit logging. The store and index
//! live inside a [`SearchService`], which keeps them in step.

use crate::audit::AuditEntry;
use crate::config::settings::Settings;
use crate::error::{ContactError, ContactResult};
use crate::models::{to_title_case, Contact};
use crate::search::{MemoryContactStore, PrefixIndex, SearchService};
use crate::storage::Storage;

/// Service for contact management
pub struct ContactService {
    storage: Storage,
    book: SearchService<MemoryContactStore, PrefixIndex>,
    title_case_names: bool,
    allow_duplicate_names: bool,
}

impl ContactService {
    /// Load saved contacts and build the search index
    pub fn open(storage: Storage, settings: &Settings) -> ContactResult<Self> {
        let contacts = storage.contacts.load()?;
        let book = SearchService::from_store(MemoryContactStore::from(contacts), PrefixIndex::new());

        Ok(Self {
            storage,
            book,
            title_case_names: settings.title_case_names,
            allow_duplicate_names: settings.allow_duplicate_names,
        })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Add a contact after validating it
    ///
    /// Fields are trimmed and, when enabled, the name is title-cased before it
    /// reaches the store and the index.
    pub fn add(&mut self, name: &str, phone: &str, email: &str) -> ContactResult<Contact> {
        let name = name.trim();
        let name = if self.title_case_names {
            to_title_case(name)
        } else {
            name.to_string()
        };

        let contact = Contact::new(name, phone.trim(), email.trim());
        contact
            .validate()
            .map_err(|e| ContactError::Validation(e.to_string()))?;

        if !self.allow_duplicate_names && self.exists(contact.name()) {
            return Err(ContactError::duplicate_contact(contact.name()));
        }

        self.book.add(contact.clone());
        self.storage.contacts.save(self.book.list())?;
        self.storage.log_create(&contact)?;

        tracing::info!(name = contact.name(), "contact added");
        Ok(contact)
    }

    /// Delete every contact with this name (ignoring case)
    ///
    /// Returns the removed contacts; an empty list means nothing matched and
    /// nothing was written.
    pub fn delete(&mut self, name: &str) -> ContactResult<Vec<Contact>> {
        let removed = self.book.remove(name.trim());
        if removed.is_empty() {
            tracing::debug!(name, "delete matched no contact");
            return Ok(removed);
        }

        self.storage.contacts.save(self.book.list())?;
        self.storage.log_delete(&removed)?;

        tracing::info!(name, count = removed.len(), "contacts deleted");
        Ok(removed)
    }

    /// All contacts sorted by name (ignoring case)
    pub fn list(&self) -> Vec<Contact> {
        sorted(self.book.list().to_vec())
    }

    /// Search contacts, sorted by name
    ///
    /// A blank query lists everything.
    pub fn search(&self, query: &str) -> Vec<Contact> {
        if query.trim().is_empty() {
            return self.list();
        }

        let results = self.book.search(query);
        tracing::debug!(query, matches = results.len(), "search");
        sorted(results)
    }

    /// Check whether a contact with this name exists (ignoring case)
    pub fn exists(&self, name: &str) -> bool {
        self.book.index().contains(name)
    }

    pub fn count(&self) -> usize {
        self.book.list().len()
    }

    /// The most recent audit entries, oldest first
    pub fn history(&self, limit: usize) -> ContactResult<Vec<AuditEntry>> {
        self.storage.audit.read_recent(limit)
    }
}

/// Sort by name ignoring case, keeping store order among equal names
fn sorted(mut contacts: Vec<Contact>) -> Vec<Contact> {
    contacts.sort_by_cached_key(|c| c.name().to_lowercase());
    contacts
}
