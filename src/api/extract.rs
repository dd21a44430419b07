//! Request payload decoding: body parsing plus typed field extraction over
//! untyped JSON objects. Pure, no side effects; every failure maps to a 400.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

fn parse_body(body: &str) -> Result<Value, ApiError> {
    if body.is_empty() {
        return Err(ApiError::bad_request("request body is empty"));
    }
    serde_json::from_str(body)
        .map_err(|e| ApiError::bad_request(format!("failed to parse JSON: {}", e)))
}

/// Parse a request body that must be a single JSON object.
pub fn parse_object_body(body: &str) -> Result<Value, ApiError> {
    let payload = parse_body(body)?;
    if !payload.is_object() {
        return Err(ApiError::bad_request("expected JSON object"));
    }
    Ok(payload)
}

/// Parse a request body that must be a non-empty JSON array of objects.
pub fn parse_array_body(body: &str) -> Result<Vec<Value>, ApiError> {
    let payload = parse_body(body)?;
    let items = match payload {
        Value::Array(items) => items,
        _ => return Err(ApiError::bad_request("expected JSON array")),
    };
    if items.is_empty() {
        return Err(ApiError::bad_request("array must not be empty"));
    }
    for (index, item) in items.iter().enumerate() {
        if !item.is_object() {
            return Err(ApiError::bad_request(format!(
                "each item must be an object, offending index #{}",
                index
            )));
        }
    }
    Ok(items)
}

/// Extract a required field, coercing it to `T`.
pub fn required<T: DeserializeOwned>(obj: &Value, field: &str) -> Result<T, ApiError> {
    let value = obj
        .get(field)
        .ok_or_else(|| ApiError::bad_request(format!("missing field '{}'", field)))?;
    serde_json::from_value(value.clone())
        .map_err(|e| ApiError::bad_request(format!("invalid field '{}': {}", field, e)))
}

/// Extract an optional field, falling back to `default` when absent.
/// A field that is present but malformed still fails.
pub fn optional<T: DeserializeOwned>(obj: &Value, field: &str, default: T) -> Result<T, ApiError> {
    match obj.get(field) {
        None => Ok(default),
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|e| ApiError::bad_request(format!("invalid field '{}': {}", field, e))),
    }
}

/// Extract a required string that must not be empty. Used for string
/// identifiers and profile fields.
pub fn required_non_empty(obj: &Value, field: &str) -> Result<String, ApiError> {
    let value: String = required(obj, field)?;
    if value.is_empty() {
        return Err(ApiError::bad_request(format!(
            "invalid field '{}': must not be empty",
            field
        )));
    }
    Ok(value)
}
