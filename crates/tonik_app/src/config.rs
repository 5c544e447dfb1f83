//! Application configuration
//!
//! Default theme options shipped with the application, loaded from TOML:
//!
//! ```toml
//! [theme]
//! hex_source_color = "#ffffffff"
//! is_dark_mode_enabled = true
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tonik_theme::ThemeOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Application-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default theme options, merged under caller options by [`crate::AppTheme`].
    pub theme: ThemeOptions,
}

impl AppConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(src)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let src = std::fs::read_to_string(path)?;
        Self::from_toml_str(&src)
    }
}
