//! Transport error type for client-side use.

use thiserror::Error;

/// Error raised by the HTTP layer before a response envelope could be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, timeout, truncated body.
    #[error("Network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
}
