//! Field decoders for host payloads.
//!
//! The host builds its JSON loosely: header numbers arrive as integers,
//! optional text as `null` or `false`, timestamps as floats. One odd field
//! must not cost the whole issue or submission list, so these decoders take
//! any JSON value and keep what they can.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// Strings pass through and numbers are stringified. Anything else is absent.
pub fn text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Whole seconds from an integer, float or numeric string; fractions are
/// truncated.
pub fn seconds(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_u64().and_then(|n| i64::try_from(n).ok()))
            .or_else(|| number.as_f64().and_then(truncate)),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(truncate))
        }
        _ => None,
    }
}

fn truncate(seconds: f64) -> Option<i64> {
    let whole = seconds.trunc();
    (whole.is_finite() && whole >= i64::MIN as f64 && whole <= i64::MAX as f64)
        .then_some(whole as i64)
}

pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text(Value::deserialize(deserializer)?))
}

pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string(deserializer)?.unwrap_or_default())
}

pub fn opt_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(seconds(&Value::deserialize(deserializer)?))
}

/// An object, or its default when the field is `null` or not an object.
pub fn object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// A list, or empty when the field is `null` or not an array. Entries that
/// are not objects are dropped.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}
