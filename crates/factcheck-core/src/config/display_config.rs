//! Presentation choices owned by the caller.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// chrono `strftime` pattern for publication dates. Default: day/month/year.
    pub date_format: String,
    /// Headline used when a source has no title, domain, or url.
    pub untitled_label: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: "%d/%m/%Y".to_string(),
            untitled_label: "Untitled source".to_string(),
        }
    }
}
