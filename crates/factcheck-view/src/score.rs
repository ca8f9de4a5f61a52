//! Confidence score normalization.
//!
//! The backend score has no declared scale: it may be a fraction in [0,1] or a
//! percentage in [0,100]. Values strictly below 1 are read as fractions. This
//! is lossy (0.5% and 50% both arrive as 0.5) and is kept as is because the
//! backend contract does not say which one it sends.

use factcheck_core::decode::parse_number;
use serde_json::Value;

/// Upper bound of a normalized score.
pub const MAX_SCORE: u8 = 100;

/// Maps a raw score to an integer percentage in `0..=100`. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreNormalizer;

impl ScoreNormalizer {
    /// Normalize a parsed score. Non-finite input yields 0.
    pub fn normalize(raw: f64) -> u8 {
        if !raw.is_finite() {
            return 0;
        }
        let percent = if raw < 1.0 { raw * 100.0 } else { raw };
        // Non-negative after the clamp, so `round` is round-half-up here.
        percent.clamp(0.0, f64::from(MAX_SCORE)).round() as u8
    }

    /// Normalize an optional score; absent yields 0.
    pub fn normalize_opt(raw: Option<f64>) -> u8 {
        raw.map_or(0, Self::normalize)
    }

    /// Normalize an arbitrary JSON value (number or numeric string).
    pub fn normalize_value(raw: &Value) -> u8 {
        Self::normalize_opt(parse_number(raw))
    }
}
