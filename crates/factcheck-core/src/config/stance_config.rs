//! Stance classification settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StanceConfig {
    /// Closed lower bound an NLI score must reach to decide a stance.
    pub threshold: f64,
}

impl Default for StanceConfig {
    fn default() -> Self {
        Self { threshold: 0.5 }
    }
}
