//! Contact repository for CSV storage
//!
//! Manages loading and saving contacts to contacts.csv, one
//! `name,phone,email` record per line with no header.

use std::path::{Path, PathBuf};

use crate::error::ContactError;
use crate::models::Contact;

use super::file_io::{read_csv_records, write_csv_atomic};

const FIELD_COUNT: usize = 3;

/// Repository for contact persistence
#[derive(Debug, Clone)]
pub struct ContactRepository {
    path: PathBuf,
}

impl ContactRepository {
    /// Create a new contact repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load contacts from disk in file order
    ///
    /// Records without exactly three fields are skipped. A missing file
    /// loads as an empty book.
    pub fn load(&self) -> Result<Vec<Contact>, ContactError> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no saved contacts found");
            return Ok(Vec::new());
        }

        let records = read_csv_records(&self.path)?;
        let mut contacts = Vec::with_capacity(records.len());

        for (line, record) in records.iter().enumerate() {
            if record.len() != FIELD_COUNT {
                tracing::warn!(
                    line = line + 1,
                    fields = record.len(),
                    "skipping malformed contact record"
                );
                continue;
            }
            contacts.push(Contact::new(&record[0], &record[1], &record[2]));
        }

        tracing::info!(count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    /// Save contacts to disk, replacing the file
    pub fn save(&self, contacts: &[Contact]) -> Result<(), ContactError> {
        write_csv_atomic(
            &self.path,
            contacts
                .iter()
                .map(|c| [c.name(), c.phone(), c.email()]),
        )
    }
}
