//! Stable error codes, so callers can branch without parsing messages.

pub const CONFIG_READ_FAILED: &str = "CONFIG_READ_FAILED";
pub const CONFIG_PARSE_FAILED: &str = "CONFIG_PARSE_FAILED";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
pub const INVALID_CLAIM: &str = "INVALID_CLAIM";
pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
pub const HTTP_STATUS: &str = "HTTP_STATUS";
pub const DECODE_FAILED: &str = "DECODE_FAILED";
pub const TELEMETRY_INIT_FAILED: &str = "TELEMETRY_INIT_FAILED";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";

/// Implemented by every error enum in the workspace.
pub trait FactcheckErrorCode {
    fn error_code(&self) -> &'static str;
}
