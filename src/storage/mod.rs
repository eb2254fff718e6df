//! Storage layer for the contact book
//!
//! Flat CSV storage with atomic writes, plus the append-only audit log.

pub mod contacts;
pub mod file_io;

pub use contacts::ContactRepository;
pub use file_io::{read_csv_records, write_csv_atomic};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::ContactPaths;
use crate::error::ContactError;
use crate::models::Contact;

/// Main storage coordinator
pub struct Storage {
    paths: ContactPaths,
    pub contacts: ContactRepository,
    pub audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ContactPaths) -> Result<Self, ContactError> {
        paths.ensure_directories()?;

        Ok(Self {
            contacts: ContactRepository::new(paths.contacts_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ContactPaths {
        &self.paths
    }

    /// Record an added contact in the audit log
    pub fn log_create(&self, contact: &Contact) -> Result<(), ContactError> {
        self.audit.log(&AuditEntry::create(contact))
    }

    /// Record deleted contacts in the audit log
    pub fn log_delete(&self, contacts: &[Contact]) -> Result<(), ContactError> {
        let entries: Vec<_> = contacts.iter().map(AuditEntry::delete).collect();
        self.audit.log_batch(&entries)
    }
}
