//! JSON request/response protocol
//!
//! Input is `{"requirement_doc": "..."}`; output is `{"codex_prompt": "..."}`
//! on success or `{"error": "..."}` on failure.

use crate::errors::{PromptError, PromptResult};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Incoming request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub requirement_doc: String,
}

impl PromptRequest {
    /// Validate a parsed JSON value. Unknown keys are ignored.
    pub fn from_value(value: Value) -> PromptResult<Self> {
        let mut map = match value {
            Value::Object(map) => map,
            other => {
                return Err(PromptError::invalid_input(format!(
                    "request must be a JSON object, got {}",
                    value_kind(&other)
                )));
            }
        };

        match map.remove("requirement_doc") {
            None => Err(PromptError::MissingDocument),
            Some(value) if is_blank(&value) => Err(PromptError::MissingDocument),
            Some(Value::String(doc)) => Ok(Self { requirement_doc: doc }),
            Some(other) => Err(PromptError::invalid_input(format!(
                "requirement_doc must be a string, got {}",
                value_kind(&other)
            ))),
        }
    }
}

/// Successful response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptResponse {
    pub codex_prompt: String,
}

impl PromptResponse {
    /// Two-space indented JSON with non-ASCII characters left as-is
    pub fn to_json_pretty(&self) -> PromptResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Failure response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }

    pub fn to_json(&self) -> PromptResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<&PromptError> for ErrorResponse {
    fn from(err: &PromptError) -> Self {
        Self::new(err.report_message())
    }
}

/// Run one raw JSON request through analysis and formatting
pub fn process_input(raw: &str) -> PromptResult<PromptResponse> {
    let value: Value = serde_json::from_str(raw)?;
    let request = PromptRequest::from_value(value)?;
    debug!("Received requirement document ({} bytes)", request.requirement_doc.len());

    Ok(PromptResponse { codex_prompt: crate::generate_prompt(&request.requirement_doc) })
}

/// Null, false, zero and empty strings, arrays or objects all count as no document
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
