//! Stance classification from NLI scores.
//!
//! Tie-break rule: entailment is checked first. A source whose entailment
//! reaches the threshold is `Supports` even if its contradiction score is
//! higher. This is an ordered check, not a magnitude comparison.

use factcheck_core::config::StanceConfig;
use factcheck_core::{EvidenceSource, Stance};

/// Default closed lower bound for both signals.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy)]
pub struct StanceClassifier {
    threshold: f64,
}

impl StanceClassifier {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn from_config(config: &StanceConfig) -> Self {
        Self::new(config.threshold)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Classify one pair of scores. Missing and NaN scores never reach the threshold.
    pub fn classify(&self, entail: Option<f64>, contra: Option<f64>) -> Stance {
        if entail.is_some_and(|e| e >= self.threshold) {
            Stance::Supports
        } else if contra.is_some_and(|c| c >= self.threshold) {
            Stance::Contradicts
        } else {
            Stance::Neutral
        }
    }

    pub fn classify_source(&self, source: &EvidenceSource) -> Stance {
        self.classify(source.nli_max_entail, source.nli_max_contra)
    }
}

impl Default for StanceClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}
