//! Catalog document types.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Placeholder used when an entry has no identifier.
pub const UNKNOWN_ID: &str = "N/A";

/// Remote catalog response (`GET /api/v1/models`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub data: Vec<ModelEntry>,
}

/// Filtered catalog as written to `models.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelList {
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

/// One catalog entry, kept as the raw JSON value it arrived as.
///
/// Only `id` and `pricing` are interpreted, and only when read. An entry of
/// the wrong shape still decodes; it just has no usable id or price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelEntry(Value);

impl ModelEntry {
    pub fn new(id: impl Into<String>, prompt: &str, completion: &str) -> Self {
        Self(json!({
            "id": id.into(),
            "pricing": {"prompt": prompt, "completion": completion},
        }))
    }

    /// String identifier, if the entry has one.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// Identifier for display.
    pub fn display_id(&self) -> &str {
        self.id().unwrap_or(UNKNOWN_ID)
    }

    /// Per-token prompt cost. A missing price counts as zero.
    pub fn prompt_cost(&self) -> Option<f64> {
        self.cost("prompt")
    }

    /// Per-token completion cost. A missing price counts as zero.
    pub fn completion_cost(&self) -> Option<f64> {
        self.cost("completion")
    }

    /// Prompt plus completion cost, or `None` if either does not parse.
    pub fn total_price(&self) -> Option<f64> {
        Some(self.prompt_cost()? + self.completion_cost()?)
    }

    fn cost(&self, key: &str) -> Option<f64> {
        let Value::Object(entry) = &self.0 else {
            return None;
        };
        match entry.get("pricing") {
            None | Some(Value::Null) => Some(0.0),
            Some(Value::Object(pricing)) => match pricing.get(key) {
                None | Some(Value::Null) => Some(0.0),
                Some(price) => parse_price(price),
            },
            Some(_) => None,
        }
    }
}

impl Default for ModelEntry {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl From<Value> for ModelEntry {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Numeric value of a price. Providers send decimal strings (`"0.00025"`),
/// occasionally bare numbers, and `"-1"` for "not available". Anything else,
/// NaN included, is unparseable.
pub fn parse_price(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    parsed.filter(|v| !v.is_nan())
}
