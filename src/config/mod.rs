//! Configuration module for fdd
//!
//! This module provides configuration management including:
//! - State file path resolution
//! - Currency and summary settings

pub mod paths;
pub mod settings;

pub use paths::FddPaths;
pub use settings::Settings;
