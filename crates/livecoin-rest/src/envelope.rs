//! Two-phase response decoding
//!
//! Livecoin answers with HTTP 200 or 400 and reports failures inside the
//! body as `{"errorMessage": "..."}`. Responses are therefore decoded twice:
//! first into a loose [`Value`] to probe for an embedded error, then into the
//! endpoint's typed result.

use crate::error::{RestError, RestResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Field carrying an application error
pub const ERROR_MESSAGE_FIELD: &str = "errorMessage";

/// Field carrying exception text on some responses
pub const EXCEPTION_FIELD: &str = "exception";

/// Parse bytes into the generic envelope
pub fn parse(bytes: &[u8]) -> RestResult<Value> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Fail if the envelope carries an application error
///
/// Objects with a non-empty string `errorMessage` become [`RestError::Api`].
/// Arrays never carry one. Any other top-level value is rejected.
pub fn check(envelope: &Value) -> RestResult<()> {
    match envelope {
        Value::Object(map) => match map.get(ERROR_MESSAGE_FIELD) {
            Some(Value::String(message)) if !message.is_empty() => Err(RestError::api(message.as_str())),
            _ => Ok(()),
        },
        Value::Array(_) => Ok(()),
        other => Err(RestError::UnrecognizedShape(shape_name(other))),
    }
}

/// Whether the envelope is an object whose `exception` equals `text`
pub fn has_exception(envelope: &Value, text: &str) -> bool {
    envelope
        .as_object()
        .and_then(|map| map.get(EXCEPTION_FIELD))
        .and_then(Value::as_str)
        .map(|exception| exception == text)
        .unwrap_or(false)
}

/// Probe for an embedded error, then decode into `T`
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> RestResult<T> {
    let envelope = parse(bytes)?;
    check(&envelope)?;
    Ok(serde_json::from_slice(bytes)?)
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
