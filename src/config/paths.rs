//! Path management for the contact book
//!
//! ## Path Resolution Order
//!
//! 1. `CONTACT_BOOK_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/contact-book` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ContactError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "CONTACT_BOOK_DIR";

/// Manages all paths used by the contact book
#[derive(Debug, Clone)]
pub struct ContactPaths {
    /// Base directory for all contact book files
    base_dir: PathBuf,
}

impl ContactPaths {
    /// Create a new ContactPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, ContactError> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ContactPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to contacts.csv
    pub fn contacts_file(&self) -> PathBuf {
        self.base_dir.join("contacts.csv")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the diagnostic log
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("contact-book.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ContactError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ContactError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if the contact book has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, ContactError> {
    ProjectDirs::from("", "", "contact-book")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ContactError::Config("Could not determine a home directory".into()))
}
