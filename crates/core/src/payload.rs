//! Field extraction from untyped JSON request bodies.
//!
//! Handlers receive the body as a [`serde_json::Value`] so that an absent key
//! can be reported by name instead of surfacing as a generic deserialization
//! failure. Each `require_*` helper treats an absent key and an explicit
//! `null` the same way: [`CoreError::MissingField`].

use serde_json::{Map, Value};

use crate::error::CoreError;

/// A decoded JSON object body.
pub type JsonObject = Map<String, Value>;

/// Error text returned when a body is not JSON.
pub const NOT_JSON_MESSAGE: &str = "The request payload is not in JSON format";

/// Borrow `value` as an object, rejecting arrays, scalars and `null`.
pub fn as_object(value: &Value) -> Result<&JsonObject, CoreError> {
    value
        .as_object()
        .ok_or_else(|| CoreError::MalformedBody(NOT_JSON_MESSAGE.to_string()))
}

/// Look up a required key.
pub fn require<'a>(obj: &'a JsonObject, field: &'static str) -> Result<&'a Value, CoreError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(CoreError::MissingField { field }),
        Some(value) => Ok(value),
    }
}

/// A required integer column value that fits in an `i32`.
///
/// JSON integers are taken as is. Strings are parsed the way PostgreSQL reads
/// integer input, so `"4"` and `" 4 "` both store 4.
pub fn require_i32(obj: &JsonObject, field: &'static str) -> Result<i32, CoreError> {
    let parsed = match require(obj, field)? {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| type_mismatch(field, "a 32-bit integer"))
}

/// A required text column value.
///
/// Scalars are stored as their text form: numbers keep their JSON text
/// (`450` becomes `"450"`) and booleans become `"true"` / `"false"`.
/// Objects and arrays have no text form and are rejected.
pub fn require_text(obj: &JsonObject, field: &'static str) -> Result<String, CoreError> {
    match require(obj, field)? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(type_mismatch(field, "a string, number or boolean")),
    }
}

fn type_mismatch(field: &str, expected: &str) -> CoreError {
    CoreError::Validation(format!("Field '{field}' must be {expected}"))
}
