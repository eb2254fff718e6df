//! Custom error types for the contact book
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The search core itself never fails; these
//! errors come from storage, validation and the user interfaces around it.

use thiserror::Error;

/// The main error type for contact book operations
#[derive(Error, Debug)]
pub enum ContactError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl ContactError {
    /// Create a "not found" error for contacts
    pub fn contact_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contact",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for contacts
    pub fn duplicate_contact(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Contact",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ContactError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ContactError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ContactError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for contact book operations
pub type ContactResult<T> = Result<T, ContactError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContactError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = ContactError::contact_not_found("Ann");
        assert_eq!(err.to_string(), "Contact not found: Ann");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_duplicate_error() {
        let err = ContactError::duplicate_contact("Bob");
        assert_eq!(err.to_string(), "Contact already exists: Bob");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ContactError = io_err.into();
        assert!(matches!(err, ContactError::Io(_)));
    }
}
