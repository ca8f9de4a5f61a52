//! Configuration loading and validation errors.

use std::path::PathBuf;

use super::error_code::{self, FactcheckErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl FactcheckErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Read { .. } => error_code::CONFIG_READ_FAILED,
            Self::Parse(_) => error_code::CONFIG_PARSE_FAILED,
            Self::Invalid { .. } => error_code::CONFIG_INVALID,
        }
    }
}
