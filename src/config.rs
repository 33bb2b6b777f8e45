//! Game configuration
//!
//! Display and logging settings read from an optional `hangman.json` next to
//! the executable. Every field has a default, so a partial file (or none at all)
//! is fine.
//!
//! ```json
//! {
//!     "window_title": "Hangman",
//!     "window_scale": 2,
//!     "log_level": "debug"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::Level;

pub const CONFIG_FILENAME: &str = "hangman.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_title: String,

    /// Integer window scale; computed from the monitor when absent
    pub window_scale: Option<u32>,

    /// One of trace, debug, info, warn, error
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window_title: "Hangman".to_string(),
            window_scale: None,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    IoError(io::Error),
    ParseError(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load the config file if it exists
    ///
    /// Returns the defaults plus an optional error to report. The error is
    /// handed back rather than logged because logging isn't set up until the
    /// config has told us which level to use.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<ConfigError>) {
        let path = path.as_ref();
        if !path.exists() {
            return (Self::default(), None);
        }
        match Self::load_from_file(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Parsed log level, `INFO` if the string isn't recognised
    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}

/// Path of `hangman.json` next to the running executable
pub fn default_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILENAME)))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
}
