//! Server Envelope
//!
//! The backend answers `{ success, data }` (and sometimes other
//! collection-shaped variants). The adapter passes the decoded body through
//! untouched; this wrapper only adds read accessors.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientResult;

/// Raw decoded response body
#[derive(Debug, Clone, PartialEq)]
pub struct ServerEnvelope(Value);

impl ServerEnvelope {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Decode a response body; an empty body becomes `null`
    pub fn from_body(body: &str) -> ClientResult<Self> {
        if body.trim().is_empty() {
            return Ok(Self(Value::Null));
        }
        Ok(Self(serde_json::from_str(body)?))
    }

    /// `success` flag; bodies without one are treated as successful
    pub fn success(&self) -> bool {
        self.0
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(true)
    }

    /// The `data` member, if present
    pub fn data(&self) -> Option<&Value> {
        self.0.get("data")
    }

    /// The `message` member, if present
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    /// Look up a top-level member by name
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Deserialize the `data` member into `T`
    pub fn decode_data<T: DeserializeOwned>(&self) -> ClientResult<T> {
        let data = self.data().cloned().unwrap_or(Value::Null);
        Ok(serde_json::from_value(data)?)
    }
}

impl From<Value> for ServerEnvelope {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Pull the server's error string out of a non-2xx body, if it has one
pub(crate) fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(Value::as_str)
        .map(str::to_string)
}
