//! The backend's verification result for one claim.

use serde::{Deserialize, Deserializer, Serialize};

use super::{CoverageBucket, EvidenceSource};
use crate::decode;

/// Verification result for one claim.
///
/// `score` keeps the backend's raw number; its scale is ambiguous (a fraction
/// in [0,1] or a percentage in [0,100]) and is only resolved when normalized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VerificationResult {
    pub claim: String,
    /// Raw score. `None` when the backend sent nothing numeric.
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_domains: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_bucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub sources: Vec<EvidenceSource>,
}

impl VerificationResult {
    /// Parsed coverage bucket, if the label is one we know.
    pub fn coverage(&self) -> Option<CoverageBucket> {
        self.coverage_bucket.as_deref().and_then(CoverageBucket::parse)
    }
}

impl<'de> Deserialize<'de> for VerificationResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(decode::decode_result(&value))
    }
}
