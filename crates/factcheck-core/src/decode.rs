//! Lenient decoding of backend responses.
//!
//! Accepts any JSON value and always produces a valid `VerificationResult`.
//! Missing or mistyped fields become well-defined defaults:
//! - text fields: `None` (empty strings count as missing)
//! - `chunks`: empty, non-string items dropped
//! - NLI scores: `None` unless a JSON number
//! - `score`: `None` unless a finite number or numeric string
//! - `sources`: empty, non-object items dropped
//!
//! Nothing here returns an error for shape problems; only text that is not JSON
//! at all fails in [`decode_str`].

use serde_json::{Map, Value};
use tracing::debug;

use crate::models::{EvidenceSource, VerificationResult};

/// Decode a response body. Fails only if `body` is not JSON.
pub fn decode_str(body: &str) -> Result<VerificationResult, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;
    Ok(decode_result(&value))
}

/// Decode an arbitrary JSON value into a `VerificationResult`.
pub fn decode_result(value: &Value) -> VerificationResult {
    let Some(obj) = value.as_object() else {
        debug!(kind = kind_of(value), "verification result is not an object, using defaults");
        return VerificationResult::default();
    };

    let claim = text_field(obj, "claim").unwrap_or_default();
    let score = match obj.get("score") {
        None | Some(Value::Null) => None,
        Some(raw) => {
            let parsed = parse_number(raw);
            if parsed.is_none() {
                debug!(kind = kind_of(raw), "score is not numeric, treating as absent");
            }
            parsed
        }
    };

    let sources = match obj.get("sources") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let decoded = decode_source(item);
                if decoded.is_none() {
                    debug!(index, kind = kind_of(item), "skipping non-object source");
                }
                decoded
            })
            .collect(),
        Some(other) => {
            debug!(kind = kind_of(other), "sources is not an array, using empty list");
            Vec::new()
        }
    };

    VerificationResult {
        claim,
        score,
        unique_domains: count_field(obj, "unique_domains"),
        coverage_bucket: text_field(obj, "coverage_bucket"),
        notes: text_field(obj, "notes"),
        sources,
    }
}

/// Decode one source. Returns `None` if `value` is not a JSON object.
pub fn decode_source(value: &Value) -> Option<EvidenceSource> {
    let obj = value.as_object()?;

    Some(EvidenceSource {
        url: text_field(obj, "url"),
        domain: text_field(obj, "domain"),
        title: text_field(obj, "title"),
        published_at: text_field(obj, "published_at"),
        language: text_field(obj, "language"),
        chunks: chunks_field(obj, "chunks"),
        nli_evaluated: bool_field(obj, "nli_evaluated"),
        nli_max_entail: strict_number_field(obj, "nli_max_entail"),
        nli_max_contra: strict_number_field(obj, "nli_max_contra"),
        nli_best_ent_chunk: text_field(obj, "nli_best_ent_chunk"),
        nli_best_contra_chunk: text_field(obj, "nli_best_contra_chunk"),
    })
}

/// Interpret a JSON value as a finite number.
///
/// Accepts JSON numbers and strings holding a number (surrounding whitespace
/// ignored). Everything else, and any non-finite result, is `None`.
pub fn parse_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn text_field(obj: &Map<String, Value>, key: &'static str) -> Option<String> {
    match obj.get(key)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => {
            debug!(field = key, kind = kind_of(other), "expected text, treating as absent");
            None
        }
    }
}

fn bool_field(obj: &Map<String, Value>, key: &'static str) -> Option<bool> {
    match obj.get(key)? {
        Value::Null => None,
        Value::Bool(b) => Some(*b),
        other => {
            debug!(field = key, kind = kind_of(other), "expected boolean, treating as absent");
            None
        }
    }
}

/// Numbers only: a numeric string is not an NLI score.
fn strict_number_field(obj: &Map<String, Value>, key: &'static str) -> Option<f64> {
    match obj.get(key)? {
        Value::Null => None,
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        other => {
            debug!(field = key, kind = kind_of(other), "expected number, treating as absent");
            None
        }
    }
}

fn count_field(obj: &Map<String, Value>, key: &'static str) -> Option<u64> {
    let value = obj.get(key)?;
    if value.is_null() {
        return None;
    }
    let count = value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
            .map(|f| f as u64)
    });
    if count.is_none() {
        debug!(field = key, kind = kind_of(value), "expected non-negative integer, treating as absent");
    }
    count
}

fn chunks_field(obj: &Map<String, Value>, key: &'static str) -> Vec<String> {
    match obj.get(key) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                other => {
                    debug!(field = key, kind = kind_of(other), "dropping non-text chunk");
                    None
                }
            })
            .collect(),
        Some(other) => {
            debug!(field = key, kind = kind_of(other), "expected array, using empty list");
            Vec::new()
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
