//! Publication date formatting.
//!
//! Backends send whatever the scraped page declared, so parsing tries a list of
//! common shapes. A timestamp keeps the calendar date of its own offset; it is
//! not shifted into the local zone.

use std::fmt::Write;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use factcheck_core::config::{is_valid_date_format, DisplayConfig};
use tracing::{trace, warn};

/// Default pattern: day/month/year.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%d %H:%M:%S%z"];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Renders date-like text as a display date, or `""` when it cannot.
#[derive(Debug, Clone)]
pub struct DateFormatter {
    pattern: String,
}

impl DateFormatter {
    /// An unusable pattern falls back to [`DEFAULT_DATE_FORMAT`].
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        if pattern.trim().is_empty() || !is_valid_date_format(&pattern) {
            warn!(pattern = %pattern, "unusable date format, using default");
            return Self::default();
        }
        Self { pattern }
    }

    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(config.date_format.clone())
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Format `raw`; absent or unparseable input yields `""`.
    pub fn format(&self, raw: Option<&str>) -> String {
        match raw.and_then(parse_date) {
            Some(date) => {
                let mut out = String::new();
                match write!(out, "{}", date.format(&self.pattern)) {
                    Ok(()) => out,
                    Err(_) => {
                        trace!(pattern = %self.pattern, "date pattern failed to render");
                        String::new()
                    }
                }
            }
            None => String::new(),
        }
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Parse date-like text into a calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.date_naive());
    }
    for fmt in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(dt.date_naive());
        }
    }
    // Zulu suffix without a full RFC 3339 shape, e.g. "2024-01-15T10:00Z".
    let naive = raw.strip_suffix('Z').unwrap_or(raw);
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, fmt) {
            return Some(dt.date());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date);
        }
    }

    trace!(raw, "unrecognised date");
    None
}
