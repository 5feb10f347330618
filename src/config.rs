//! Store configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::query::DEFAULT_LIMIT;

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Row limit for requests that do not name one.
    #[serde(default = "default_limit")]
    pub default_limit: i64,

    /// Log level used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Field separator for `.csv` and `.txt` uploads.
    #[serde(default = "default_csv_delimiter")]
    pub csv_delimiter: char,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_csv_delimiter() -> char {
    ','
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            log_level: default_log_level(),
            csv_delimiter: default_csv_delimiter(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Serializes the configuration to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Saves configuration to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}
