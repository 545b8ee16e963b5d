//! Item domain model

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::fields::{deserialize_id, deserialize_optional_text};

/// An item record as returned by the items endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub description: Option<String>,
    /// Price as sent: a number, a decimal string, null, or absent
    #[serde(default)]
    pub price: Option<JsonValue>,
}

impl RawItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// A cleaned item with a non-negative floating point price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}
