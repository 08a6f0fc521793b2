//! Type coercion and default insertion for flat environment documents.
//!
//! Environment values always arrive as strings. Before validation each
//! top-level property declaring a `type` is converted when the string has an
//! unambiguous reading in that type:
//!
//! | target    | accepted input                          |
//! |-----------|-----------------------------------------|
//! | `number`  | any finite decimal (`"1.5"`, `" -3 "`)  |
//! | `integer` | a whole number (`"42"`, `"4.0"`)        |
//! | `boolean` | `"true"` / `"false"`                    |
//! | `null`    | `""`                                    |
//! | `string`  | numbers and booleans (from defaults)    |
//!
//! Numeric targets ignore surrounding whitespace; a blank string is never
//! a number. Values that cannot be converted are left untouched so the
//! validator reports them.

use serde_json::{Map, Number, Value};

/// The `type` keyword of a property schema, as a list.
pub fn declared_types(schema: &Value) -> Vec<&str> {
    match schema.get("type") {
        Some(Value::String(ty)) => vec![ty.as_str()],
        Some(Value::Array(types)) => types.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

/// Insert each top-level property's `default` when the key is missing.
///
/// Returns the keys that received a default.
pub fn apply_defaults(schema: &Value, document: &mut Map<String, Value>) -> Vec<String> {
    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return Vec::new();
    };

    let mut applied = Vec::new();
    for (key, property) in properties {
        if document.contains_key(key) {
            continue;
        }
        if let Some(default) = property.get("default") {
            document.insert(key.clone(), default.clone());
            applied.push(key.clone());
        }
    }
    applied
}

/// Coerce every top-level property in place. Returns the keys that changed.
pub fn coerce_properties(schema: &Value, document: &mut Map<String, Value>) -> Vec<String> {
    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return Vec::new();
    };

    let mut coerced = Vec::new();
    for (key, property) in properties {
        let types = declared_types(property);
        if types.is_empty() {
            continue;
        }
        let Some(value) = document.get_mut(key) else {
            continue;
        };
        if let Some(converted) = coerce_value(value, &types) {
            *value = converted;
            coerced.push(key.clone());
        }
    }
    coerced
}

/// Convert `value` into the first of `types` that accepts it.
///
/// Returns `None` when the value already matches one of the types or no
/// conversion applies.
pub fn coerce_value(value: &Value, types: &[&str]) -> Option<Value> {
    if types.iter().any(|ty| matches_type(value, ty)) {
        return None;
    }
    types.iter().find_map(|ty| coerce_to(value, ty))
}

fn matches_type(value: &Value, ty: &str) -> bool {
    match ty {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => is_integer(value),
        "boolean" => value.is_boolean(),
        "null" => value.is_null(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        _ => false,
    }
}

fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(number) => {
            number.is_i64() || number.is_u64() || number.as_f64().is_some_and(|f| f.fract() == 0.0)
        }
        _ => false,
    }
}

fn coerce_to(value: &Value, ty: &str) -> Option<Value> {
    match (ty, value) {
        ("number", Value::String(raw)) => parse_number(raw),
        ("integer", Value::String(raw)) => parse_integer(raw),
        ("boolean", Value::String(raw)) => match raw.as_str() {
            "true" => Some(Value::Bool(true)),
            "false" => Some(Value::Bool(false)),
            _ => None,
        },
        ("null", Value::String(raw)) if raw.is_empty() => Some(Value::Null),
        ("string", Value::Number(number)) => Some(Value::String(number.to_string())),
        ("string", Value::Bool(flag)) => Some(Value::String(flag.to_string())),
        ("number" | "integer", Value::Bool(flag)) => Some(Value::from(u8::from(*flag))),
        _ => None,
    }
}

fn parse_number(raw: &str) -> Option<Value> {
    let raw = raw.trim();
    if let Ok(int) = raw.parse::<i64>() {
        return Some(Value::from(int));
    }
    let float = raw.parse::<f64>().ok().filter(|f| f.is_finite())?;
    Number::from_f64(float).map(Value::Number)
}

fn parse_integer(raw: &str) -> Option<Value> {
    let raw = raw.trim();
    if let Ok(int) = raw.parse::<i64>() {
        return Some(Value::from(int));
    }
    if let Ok(uint) = raw.parse::<u64>() {
        return Some(Value::from(uint));
    }
    let float = raw.parse::<f64>().ok().filter(|f| f.is_finite() && f.fract() == 0.0)?;
    if float >= i64::MIN as f64 && float <= i64::MAX as f64 {
        Some(Value::from(float as i64))
    } else {
        Number::from_f64(float).map(Value::Number)
    }
}
