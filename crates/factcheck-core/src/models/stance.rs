//! Stance of one evidence source toward the claim.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Derived supports / contradicts / neutral label for one evidence source.
/// Exactly one value per source; there is no "unknown".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    /// Evidence entails the claim.
    Supports,
    /// Evidence contradicts the claim.
    Contradicts,
    /// Neither signal reached the threshold, or no signal was available.
    #[default]
    Neutral,
}

impl Stance {
    /// All stances in classification priority order.
    pub const ALL: [Stance; 3] = [Self::Supports, Self::Contradicts, Self::Neutral];

    /// Wire name, as used in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Supports => "supports",
            Self::Contradicts => "contradicts",
            Self::Neutral => "neutral",
        }
    }

    /// Human-readable badge text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Supports => "Supports the claim",
            Self::Contradicts => "Contradicts the claim",
            Self::Neutral => "Neutral / unclear",
        }
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
