//! Request and response shapes of the HTTP API.

use serde::Serialize;
use serde_json::Value;

/// Returned with 400 whenever `/ask` cannot find a usable `message`.
pub const MISSING_MESSAGE: &str = "Missing 'message' in request";

/// A validated `/ask` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskRequest {
    pub message: String,
}

impl AskRequest {
    /// Parse a raw body. `None` when the body is not JSON, not an object, or
    /// has no non-null `message`.
    ///
    /// A string message is taken verbatim; any other JSON value is forwarded
    /// as its compact JSON text.
    pub fn from_body(body: &[u8]) -> Option<Self> {
        let value: Value = serde_json::from_slice(body).ok()?;

        let message = match value.as_object()?.get("message")? {
            Value::Null => return None,
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        Some(Self { message })
    }
}

/// Success envelope of `/ask`.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub status: &'static str,
    pub reply: String,
}

impl AskResponse {
    pub fn success(reply: String) -> Self {
        Self {
            status: "success",
            reply,
        }
    }
}
