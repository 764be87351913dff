//! Canonical string form for environment values.
//!
//! Builders inject typed values (integers, booleans) into env entries, while the
//! container schema only accepts strings.

use serde_json::{Map, Value};

/// Coerce a single value: integers become decimal strings, booleans become
/// `"true"`/`"false"`. Everything else passes through unchanged.
#[must_use]
pub fn coerce_value(value: &Value) -> Value {
    match value {
        Value::Number(number) if number.is_i64() || number.is_u64() => {
            Value::String(number.to_string())
        }
        Value::Bool(flag) => Value::String(flag.to_string()),
        other => other.clone(),
    }
}

/// Coerce every value of one env entry, keeping its keys.
#[must_use]
pub fn coerce_entry(entry: &Map<String, Value>) -> Map<String, Value> {
    entry
        .iter()
        .map(|(key, value)| (key.clone(), coerce_value(value)))
        .collect()
}
