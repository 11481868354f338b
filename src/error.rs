//! Error types for the calculator crate.
//!
//! Arithmetic faults never show up here: division by zero is reported through
//! the `"Error"` display sentinel. These errors cover the edges around the
//! engine (input translation, clipboard, configuration).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Unknown token '{0}'")]
    UnknownToken(String),

    #[error("Unknown key '{0}'")]
    UnknownKey(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, CalcError>;
