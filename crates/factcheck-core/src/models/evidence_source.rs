//! One evidence source as returned by the verification backend.

use serde::{Deserialize, Deserializer, Serialize};

use crate::decode;

/// An evidence source with its NLI signal.
///
/// Values are immutable inputs: nothing downstream mutates them, derived
/// fields live in separate view types. Text fields that the backend sent as
/// empty strings are decoded as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvidenceSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Host name. When absent it can be derived from `url`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Date-like text, format not guaranteed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Ordered text excerpts, most relevant first.
    pub chunks: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nli_evaluated: Option<bool>,
    /// Maximum entailment probability over the evaluated chunks (0.0-1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nli_max_entail: Option<f64>,
    /// Maximum contradiction probability over the evaluated chunks (0.0-1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nli_max_contra: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nli_best_ent_chunk: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nli_best_contra_chunk: Option<String>,
}

impl EvidenceSource {
    /// Source whose only populated field is `domain`.
    pub fn with_domain(domain: impl Into<String>) -> Self {
        Self {
            domain: Some(domain.into()),
            ..Self::default()
        }
    }

    /// Source whose only populated field is `url`.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Whether the backend ran NLI over this source.
    pub fn is_nli_evaluated(&self) -> bool {
        self.nli_evaluated.unwrap_or(false)
    }
}

impl<'de> Deserialize<'de> for EvidenceSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(decode::decode_source(&value).unwrap_or_default())
    }
}
