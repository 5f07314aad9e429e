//! JSON record helpers shared by the material types.

use serde_json::{Map, Value};

use crate::error::MaterialError;

/// Glow fields as `(field, record key)`. `max_radius` travels as `radius`.
pub const GLOW_FIELDS: [(&str, &str); 4] = [
    ("red", "red"),
    ("green", "green"),
    ("blue", "blue"),
    ("max_radius", "radius"),
];

pub fn get<'a>(
    record: &'a Map<String, Value>,
    key: &'static str,
) -> Result<&'a Value, MaterialError> {
    record.get(key).ok_or(MaterialError::MissingField(key))
}

pub fn get_str<'a>(
    record: &'a Map<String, Value>,
    key: &'static str,
) -> Result<&'a str, MaterialError> {
    get(record, key)?
        .as_str()
        .ok_or_else(|| MaterialError::invalid(key, "expected a string"))
}

/// Checks that every key of `keys` exists before anything is built.
pub fn require(record: &Map<String, Value>, keys: &[&'static str]) -> Result<(), MaterialError> {
    for key in keys {
        get(record, key)?;
    }

    Ok(())
}

pub fn number(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}
