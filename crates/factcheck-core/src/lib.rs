//! # factcheck-core
//!
//! Foundation crate for factcheck.
//! Defines the verification models, the lenient response decoder, configuration,
//! errors, and tracing setup. Every other crate in the workspace depends on this.
//!
//! ## Modules
//! - `config`: FactcheckConfig, TrustConfig, StanceConfig, DisplayConfig, ClientConfig
//! - `decode`: unknown JSON → VerificationResult with safe defaults
//! - `errors`: ConfigError, TransportError, FactcheckError, error codes
//! - `models`: VerificationResult, EvidenceSource, Stance, CoverageBucket
//! - `telemetry`: tracing-subscriber initialisation for binaries

pub mod config;
pub mod decode;
pub mod errors;
pub mod models;
pub mod telemetry;

pub use config::FactcheckConfig;
pub use errors::{FactcheckError, FactcheckResult};
pub use models::{CoverageBucket, EvidenceSource, Stance, VerificationResult};
