//! Tri-state result handed back to presentation code.

use std::future::Future;

use futures_util::stream::{self, Stream, StreamExt};

pub const NOT_AUTHENTICATED: &str = "Not authenticated";

/// Progress of a single repository call: `Loading`, then exactly one of
/// `Success` or `Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> Resource<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Resource::Error(message.into())
    }

    /// Short-circuit result for protected calls made without a stored token.
    pub fn not_authenticated() -> Self {
        Resource::Error(NOT_AUTHENTICATED.to_string())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Resource::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Resource::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Resource::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Resource::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resource<U> {
        match self {
            Resource::Loading => Resource::Loading,
            Resource::Success(data) => Resource::Success(f(data)),
            Resource::Error(message) => Resource::Error(message),
        }
    }

    /// Emit `Loading`, then whatever `call` resolves to.
    ///
    /// ```ignore
    /// let states: Vec<_> = Resource::track(auth.login(email, password)).collect().await;
    /// ```
    pub fn track<F>(call: F) -> impl Stream<Item = Resource<T>>
    where
        F: Future<Output = Resource<T>>,
    {
        stream::iter([Resource::Loading]).chain(stream::once(call))
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for Resource<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Resource::Success(data),
            Err(e) => Resource::Error(e.to_string()),
        }
    }
}
