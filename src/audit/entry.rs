//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Contact;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Contact was added
    Create,
    /// Contact was deleted
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Contacts are immutable, so every entry carries the full record as it was
/// added or as it was just before deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// The affected contact
    pub contact: Contact,
}

impl AuditEntry {
    /// Create a new audit entry for an added contact
    pub fn create(contact: &Contact) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            contact: contact.clone(),
        }
    }

    /// Create a new audit entry for a deleted contact
    pub fn delete(contact: &Contact) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            contact: contact.clone(),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.contact
        )
    }
}
