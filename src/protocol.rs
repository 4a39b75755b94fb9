//! Wire types for the inference endpoint.
//!
//! The request carries exactly `model` and `prompt`. Of the response, only the
//! `response` field is consumed; everything else the server sends is ignored.

use serde::Serialize;
use serde_json::Value;

/// Text shown when the endpoint answers without a `response` field.
pub const PLACEHOLDER: &str = "No data came back";

/// Request body posted to the endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    /// Which model to run.
    pub model: &'a str,
    /// What to ask it.
    pub prompt: &'a str,
}

/// Parsed response body.
#[derive(Debug, Clone)]
pub struct GenerateResponse {
    body: serde_json::Map<String, Value>,
}

impl GenerateResponse {
    /// Parse a response body, which must be a JSON object.
    pub fn parse(body: &str) -> Result<Self, DecodeError> {
        match serde_json::from_str::<Value>(body)? {
            Value::Object(body) => Ok(Self { body }),
            other => Err(DecodeError::NotAnObject(json_kind(&other))),
        }
    }

    /// The generated text, or [`PLACEHOLDER`] if the `response` field is missing.
    pub fn text(&self) -> String {
        match self.body.get("response") {
            None => PLACEHOLDER.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Why a response body could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
