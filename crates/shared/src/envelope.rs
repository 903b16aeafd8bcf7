//! The `{success, message, data}` envelope every backend endpoint answers with.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

/// Uniform response wrapper used by every `/api/*` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Envelope for endpoints whose `data` payload is irrelevant to the client.
pub type Ack = ApiResponse<IgnoredAny>;

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: String::new(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// The server message, or `default` when the server sent a blank one.
    pub fn message_or(&self, default: &str) -> String {
        if self.message.trim().is_empty() {
            default.to_string()
        } else {
            self.message.clone()
        }
    }
}

/// Attempt to pull a user-facing message out of a non-2xx response body.
///
/// The backend usually wraps errors in the same envelope as successes, so a
/// 401 or 422 body still carries `message`. Anything else yields `None`.
pub fn envelope_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ApiResponse<IgnoredAny>>(body).ok()?;
    let message = parsed.message.trim();
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}
