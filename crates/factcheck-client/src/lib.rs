//! # factcheck-client
//!
//! The single outbound request: `POST /api/verify` with `{"claim": ...}`.
//! No retry, no timeout, no cancellation. Any failure is one terminal
//! `TransportError`; a failed request never yields a partial result.

use factcheck_core::config::ClientConfig;
use factcheck_core::decode::decode_str;
use factcheck_core::errors::{ConfigError, FactcheckError, TransportError};
use factcheck_core::VerificationResult;
use serde::Serialize;
use tracing::{debug, info, warn};
use url::Url;

/// Path of the verify endpoint, relative to the backend origin.
pub const VERIFY_PATH: &str = "/api/verify";

const USER_AGENT: &str = concat!("factcheck/", env!("CARGO_PKG_VERSION"));

/// Request body.
#[derive(Debug, Serialize)]
pub struct VerifyRequest<'a> {
    pub claim: &'a str,
}

/// Reject empty and whitespace-only claims before any request is made.
pub fn validate_claim(claim: &str) -> Result<&str, TransportError> {
    if claim.trim().is_empty() {
        return Err(TransportError::InvalidClaim);
    }
    Ok(claim)
}

#[derive(Debug, Clone)]
pub struct VerifyClient {
    http: reqwest::Client,
    endpoint: Url,
    error_body_limit: usize,
}

impl VerifyClient {
    pub fn new(config: &ClientConfig) -> Result<Self, FactcheckError> {
        let base = Url::parse(&config.base_url).map_err(|e| ConfigError::Invalid {
            field: "client.base_url",
            reason: e.to_string(),
        })?;
        let endpoint = base.join(VERIFY_PATH).map_err(|e| ConfigError::Invalid {
            field: "client.base_url",
            reason: e.to_string(),
        })?;
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TransportError::Network {
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            endpoint,
            error_body_limit: config.error_body_limit,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send `claim` to the backend and decode the result.
    pub async fn verify(&self, claim: &str) -> Result<VerificationResult, TransportError> {
        let claim = validate_claim(claim)?;
        info!(endpoint = %self.endpoint, claim_len = claim.len(), "verifying claim");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&VerifyRequest { claim })
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            // The body is opaque text here; an unreadable body is reported as empty.
            let body = response.text().await.unwrap_or_default();
            let err = TransportError::status(
                status.as_u16(),
                status.canonical_reason().unwrap_or(""),
                &body,
                self.error_body_limit,
            );
            warn!(status = status.as_u16(), error = %err, "verify request failed");
            return Err(err);
        }

        let body = response.text().await.map_err(network_error)?;
        let result = decode_str(&body)?;
        debug!(sources = result.sources.len(), "verify response decoded");
        Ok(result)
    }
}

fn network_error(e: reqwest::Error) -> TransportError {
    warn!(error = %e, "verify request did not complete");
    TransportError::Network {
        message: e.to_string(),
    }
}
