//! Error types for the parts of padcalc that can fail.
//!
//! The calculator state machine itself never fails; these cover key parsing,
//! configuration loading and clipboard access.

use std::path::PathBuf;
use thiserror::Error;

/// A key token that could not be turned into a [`Key`](crate::calculator::Key).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("unknown key '{0}'")]
    UnknownKey(String),
    #[error("'{0}' is not a digit")]
    InvalidDigit(char),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value '{value}' for {key}")]
    InvalidEnv { key: String, value: String },
}

#[derive(Error, Debug, Clone)]
pub enum ClipboardError {
    #[error("Failed to access clipboard: {0}")]
    Access(String),
    #[error("Failed to copy to clipboard: {0}")]
    Copy(String),
}
