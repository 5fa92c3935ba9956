//! Remote run result and its interpretation

use serde_json::{Map, Value};

/// Parsed response body from the CI run endpoint.
///
/// Always holds a JSON value. Bodies that fail to parse are wrapped as
/// `{"message": <raw text>}`.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteResult(Value);

impl RemoteResult {
    /// Parse a response body, falling back to a `message` wrapper
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Self(value),
            Err(_) => Self::from_message(text),
        }
    }

    pub fn from_message(text: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert("message".to_string(), Value::String(text.into()));
        Self(Value::Object(map))
    }

    /// The `ok` flag, when present and boolean
    pub fn ok(&self) -> Option<bool> {
        self.0.get("ok").and_then(Value::as_bool)
    }

    pub fn summary(&self) -> Option<&Value> {
        self.0.get("summary")
    }

    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    /// What a passing run reports: `summary` when truthy, else everything
    pub fn report(&self) -> &Value {
        match self.summary() {
            Some(summary) if is_truthy(summary) => summary,
            _ => &self.0,
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// HTTP status plus parsed body from the CI run endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteResponse {
    pub status: u16,
    pub result: RemoteResult,
}

/// Final outcome of a run
#[derive(Debug, Clone, PartialEq)]
pub enum RunVerdict {
    /// Carries the value to report (summary or full result)
    Passed(Value),
    /// Carries the full result object
    Failed(Value),
}

impl RunVerdict {
    pub fn is_passed(&self) -> bool {
        matches!(self, RunVerdict::Passed(_))
    }
}

impl RemoteResponse {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            result: RemoteResult::parse(body),
        }
    }

    pub fn is_http_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// A run passes on a 2xx status unless the body says `"ok": false`.
    ///
    /// A literal `null` body has no fields to inspect and counts as a failure.
    pub fn passed(&self) -> bool {
        self.is_http_success()
            && !self.result.as_value().is_null()
            && self.result.ok() != Some(false)
    }

    pub fn verdict(&self) -> RunVerdict {
        if self.passed() {
            RunVerdict::Passed(self.result.report().clone())
        } else {
            RunVerdict::Failed(self.result.as_value().clone())
        }
    }
}
