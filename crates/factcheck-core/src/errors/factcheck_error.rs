use super::error_code::{self, FactcheckErrorCode};
use super::{ConfigError, TransportError};

/// Top-level error type for factcheck.
/// Subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum FactcheckError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Transport(#[from] TransportError),

    #[error("telemetry init failed: {0}")]
    Telemetry(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FactcheckErrorCode for FactcheckError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Transport(e) => e.error_code(),
            Self::Telemetry(_) => error_code::TELEMETRY_INIT_FAILED,
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

/// Convenience type alias.
pub type FactcheckResult<T> = Result<T, FactcheckError>;
