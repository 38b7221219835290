//! User settings for fdd
//!
//! The currency label and the summary heading are fixed when the tool is
//! configured: built-in defaults come from the build environment and an
//! optional `config.json` next to the state file may override them.

use serde::{Deserialize, Serialize};

use super::paths::FddPaths;
use crate::error::FddError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for fdd
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency label printed after amounts (e.g. "EUR")
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Heading of the verbose summary block
    #[serde(default = "default_summary_title")]
    pub summary_title: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    option_env!("FDD_CURRENCY").unwrap_or("EUR").to_string()
}

fn default_summary_title() -> String {
    "JUNK FOOD SUMMARY".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: default_currency(),
            summary_title: default_summary_title(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to the built-in defaults
    pub fn load_or_create(paths: &FddPaths) -> Result<Self, FddError> {
        let settings: Settings = read_json(paths.settings_file())
            .map_err(|e| FddError::Config(format!("Failed to load settings: {}", e)))?;

        if settings.currency.trim().is_empty() {
            return Err(FddError::Config("currency label must not be empty".into()));
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FddPaths) -> Result<(), FddError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_paths(temp_dir: &TempDir) -> FddPaths {
        FddPaths::with_state_file(temp_dir.path().join("budget.dat"))
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert!(!settings.currency.is_empty());
        assert_eq!(settings.summary_title, "JUNK FOOD SUMMARY");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Settings::load_or_create(&temp_paths(&temp_dir)).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = temp_paths(&temp_dir);

        let settings = Settings {
            currency: "CHF".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency, "CHF");
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = temp_paths(&temp_dir);
        std::fs::write(paths.settings_file(), r#"{"currency": "USD"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency, "USD");
        assert_eq!(loaded.summary_title, "JUNK FOOD SUMMARY");
    }

    #[test]
    fn test_empty_currency_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = temp_paths(&temp_dir);
        std::fs::write(paths.settings_file(), r#"{"currency": ""}"#).unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(FddError::Config(_))
        ));
    }
}
