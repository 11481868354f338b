//! Configuration loaded from a TOML file.
//!
//! Every section and field is optional; anything missing falls back to the
//! classic pocket-calculator behavior.

use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub engine: EngineConfig,
    pub logging: LoggingConfig,
}

/// How the display string is rendered on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Raw strings longer than this switch to exponential notation.
    pub max_length: usize,
    /// Fractional digits shown in exponential notation.
    pub exponent_digits: usize,
    pub group_separator: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_length: 9,
            exponent_digits: 4,
            group_separator: ",".to_string(),
        }
    }
}

/// Arithmetic settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Decimal places results are rounded to.
    pub precision: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { precision: 8 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CalcError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| CalcError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load from the user config directory, or fall back to defaults.
    ///
    /// A missing file is expected and yields the defaults. A file that exists
    /// but can't be read or parsed is returned as an error so the caller can
    /// report it once logging is up.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_if_exists(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`, or use the defaults when there is no file there.
    pub fn load_if_exists<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// `~/.config/pocket-calc/config.toml` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pocket-calc").join("config.toml"))
    }
}
