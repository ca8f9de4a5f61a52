//! Verify backend connection settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend origin; `/api/verify` is appended.
    pub base_url: String,
    /// Characters of an error response body kept in the error message.
    pub error_body_limit: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            error_body_limit: 300,
        }
    }
}
