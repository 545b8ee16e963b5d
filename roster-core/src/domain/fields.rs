//! Lenient field deserializers shared by the raw record types

use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

/// Deserialize ID that can be number or string
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value: JsonValue = Deserialize::deserialize(deserializer)?;
    match value {
        JsonValue::Number(n) => Ok(n.to_string()),
        JsonValue::String(s) => Ok(s),
        _ => Err(D::Error::custom("expected number or string for id")),
    }
}

/// Deserialize an optional text field
///
/// Numbers and booleans are kept in their JSON text form (a zipcode sent as
/// `92998` becomes `"92998"`). Null and absent both map to None.
pub(crate) fn deserialize_optional_text<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value: Option<JsonValue> = Option::deserialize(deserializer)?;
    match value {
        Some(JsonValue::String(s)) => Ok(Some(s)),
        Some(JsonValue::Number(n)) => Ok(Some(n.to_string())),
        Some(JsonValue::Bool(b)) => Ok(Some(b.to_string())),
        Some(JsonValue::Null) | None => Ok(None),
        Some(_) => Err(D::Error::custom("expected a scalar value for text field")),
    }
}
