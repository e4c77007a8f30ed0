//! Serde helpers for values decoded from SOAP envelopes
//!
//! The envelope reader yields every leaf as a string and a single repeated
//! element as an object, so numeric fields and lists need lenient decoding.

use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    Text(String),
}

/// Deserializes an `i64` given either as a JSON number or a numeric string
pub fn string_or_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| D::Error::custom(format!("invalid integer {s:?}: {e}"))),
    }
}

/// Like [`string_or_i64`], but null, missing and blank values become `None`
pub fn string_or_i64_opt<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid integer {s:?}: {e}"))),
    }
}

/// Null or missing strings become empty
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes a SOAP array into a `Vec`
///
/// Accepted shapes: missing, null or empty string (no items), a JSON array,
/// an object wrapping its elements in `item` (one or many), or a single object.
pub fn item_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(s)) if s.trim().is_empty() => Vec::new(),
        Some(Value::Array(values)) => values,
        Some(Value::Object(mut map)) => match map.remove("item") {
            Some(Value::Array(values)) => values,
            Some(Value::Null) => Vec::new(),
            Some(Value::String(s)) if s.trim().is_empty() => Vec::new(),
            Some(value) => vec![value],
            None if map.is_empty() => Vec::new(),
            None => vec![Value::Object(map)],
        },
        Some(other) => vec![other],
    };

    values
        .into_iter()
        .map(|value| serde_json::from_value(value).map_err(D::Error::custom))
        .collect()
}

/// An `i64` that accepts numeric strings, for use inside [`item_list`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, serde::Serialize)]
pub struct WireId(#[serde(deserialize_with = "string_or_i64")] pub i64);
