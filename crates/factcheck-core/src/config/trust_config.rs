//! Trusted-domain allow-list.

use serde::{Deserialize, Serialize};

/// Domains whose sources are flagged as trusted. Matching is case-insensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustConfig {
    pub domains: Vec<String>,
}

impl Default for TrustConfig {
    fn default() -> Self {
        Self {
            domains: [
                "www.ynet.co.il",
                "ynet.co.il",
                "www.clalit.co.il",
                "clalit.co.il",
                "www.haaretz.co.il",
                "haaretz.co.il",
                "www.health.gov.il",
                "health.gov.il",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}
