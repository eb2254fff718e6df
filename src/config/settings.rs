//! User settings for the contact book
//!
//! Persisted as JSON next to the contacts file. Every field has a default so
//! older or hand-edited files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::ContactPaths;
use crate::error::ContactError;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Quiet period after the last keystroke before the TUI runs a search
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Title-case names on add ("john doe" -> "John Doe")
    #[serde(default = "default_true")]
    pub title_case_names: bool,

    /// Whether two contacts may share a name (compared ignoring case)
    #[serde(default = "default_true")]
    pub allow_duplicate_names: bool,

    /// Default number of entries shown by `history`
    #[serde(default = "default_recent_history")]
    pub recent_history: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_search_debounce_ms() -> u64 {
    1000
}

fn default_true() -> bool {
    true
}

fn default_recent_history() -> usize {
    20
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            search_debounce_ms: default_search_debounce_ms(),
            title_case_names: true,
            allow_duplicate_names: true,
            recent_history: default_recent_history(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ContactPaths) -> Result<Self, ContactError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ContactError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ContactError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ContactPaths) -> Result<(), ContactError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ContactError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ContactError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.search_debounce_ms, 1000);
        assert!(settings.title_case_names);
        assert!(settings.allow_duplicate_names);
        assert_eq!(settings.recent_history, 20);
    }

    #[test]
    fn test_load_missing_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            search_debounce_ms: 250,
            allow_duplicate_names: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.search_debounce_ms, 250);
        assert!(!loaded.allow_duplicate_names);
        assert!(paths.is_initialized());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"title_case_names": false}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.title_case_names);
        assert_eq!(loaded.search_debounce_ms, 1000);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ContactError::Config(_)));
    }
}
