//! Errors at the single outbound request boundary.

use super::error_code::{self, FactcheckErrorCode};

/// Terminal failure of a verify request. There is no partial result.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Claim must be a non-empty string")]
    InvalidClaim,

    #[error("Network error: {message}")]
    Network { message: String },

    /// Non-success HTTP status. `body` is already truncated.
    #[error("HTTP {status} {reason}: {body}")]
    Status {
        status: u16,
        reason: String,
        body: String,
    },

    #[error("Response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TransportError {
    /// Build a `Status` error, keeping at most `limit` characters of `body`.
    pub fn status(status: u16, reason: impl Into<String>, body: &str, limit: usize) -> Self {
        Self::Status {
            status,
            reason: reason.into(),
            body: body.chars().take(limit).collect(),
        }
    }
}

impl FactcheckErrorCode for TransportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidClaim => error_code::INVALID_CLAIM,
            Self::Network { .. } => error_code::NETWORK_ERROR,
            Self::Status { .. } => error_code::HTTP_STATUS,
            Self::Decode(_) => error_code::DECODE_FAILED,
        }
    }
}
