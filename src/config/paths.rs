//! Path management for fdd
//!
//! Resolves where the budget state lives.
//!
//! ## Path Resolution Order
//!
//! 1. `FDD_DATA_FILE` environment variable (if set)
//! 2. `FDD_DATA_FILE` captured at build time
//! 3. Platform data directory (`~/.local/share/fdd/budget.dat` or equivalent)
//! 4. `data/budget.dat` relative to the working directory

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::FddError;

/// Environment variable that overrides the state file location
pub const DATA_FILE_ENV: &str = "FDD_DATA_FILE";

const STATE_FILE_NAME: &str = "budget.dat";
const SETTINGS_FILE_NAME: &str = "config.json";
const FALLBACK_STATE_FILE: &str = "data/budget.dat";

/// Manages all paths used by fdd
#[derive(Debug, Clone)]
pub struct FddPaths {
    /// The two-integer budget record
    state_file: PathBuf,
}

impl FddPaths {
    /// Create a new FddPaths instance from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the override variable is set but empty.
    pub fn new() -> Result<Self, FddError> {
        Self::resolve(std::env::var(DATA_FILE_ENV).ok())
    }

    /// Resolve paths from an explicit override value
    pub fn resolve(override_path: Option<String>) -> Result<Self, FddError> {
        let state_file = match override_path {
            Some(custom) if custom.trim().is_empty() => {
                return Err(FddError::Config(format!("{} is set but empty", DATA_FILE_ENV)));
            }
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path(),
        };

        Ok(Self { state_file })
    }

    /// Create FddPaths with a custom state file (useful for testing)
    pub fn with_state_file(state_file: PathBuf) -> Self {
        Self { state_file }
    }

    /// Get the path to the budget state record
    pub fn state_file(&self) -> &Path {
        &self.state_file
    }

    /// Get the directory holding the state record
    pub fn data_dir(&self) -> PathBuf {
        self.state_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    /// Get the path to the settings file (next to the state record)
    pub fn settings_file(&self) -> PathBuf {
        self.data_dir().join(SETTINGS_FILE_NAME)
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), FddError> {
        let dir = self.data_dir();
        if dir.as_os_str().is_empty() {
            return Ok(());
        }
        std::fs::create_dir_all(&dir)
            .map_err(|e| FddError::unavailable(&dir, format!("failed to create directory: {}", e)))
    }

    /// Check if a month has been initialized (state record exists)
    pub fn is_initialized(&self) -> bool {
        self.state_file.exists()
    }
}

/// Resolve the default state file when no runtime override is present
fn resolve_default_path() -> PathBuf {
    if let Some(built_in) = option_env!("FDD_DATA_FILE") {
        return PathBuf::from(built_in);
    }

    ProjectDirs::from("", "", "fdd")
        .map(|dirs| dirs.data_dir().join(STATE_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_STATE_FILE))
}
