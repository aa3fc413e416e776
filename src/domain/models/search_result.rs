//! Normalized catalog results.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload returned by search and lookup operations.
///
/// The catalog reports its count as `resultCount`; it is accepted on input
/// and always written back as `resultsCount`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Number of records reported upstream.
    #[serde(rename = "resultsCount", alias = "resultCount", default)]
    pub results_count: u64,

    /// Opaque result records.
    #[serde(default)]
    pub results: Vec<Value>,
}

impl SearchResult {
    /// The canonical empty result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Normalize an upstream payload.
    ///
    /// Missing, falsy or unrecognizable payloads become [`SearchResult::empty`].
    pub fn from_payload(payload: Option<Value>) -> Self {
        match payload {
            Some(value) if !is_falsy(&value) => {
                serde_json::from_value(value).unwrap_or_else(|err| {
                    tracing::warn!(error = %err, "upstream payload has unexpected shape");
                    Self::empty()
                })
            }
            _ => Self::empty(),
        }
    }

    /// Whether no records came back.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
