//! Repositories: one result-producing operation per backend capability.
//!
//! Every call runs the same protocol. A protected call without a stored
//! token returns `Error("Not authenticated")` and makes no request. Otherwise
//! the API call is issued and its outcome folded into a [`Resource`] by an
//! [`Operation`], which carries the call's default messages.

mod auth;
mod chat;
mod conversation;
mod profile;
mod settings;
mod verification;

pub use auth::AuthRepository;
pub use chat::ChatRepository;
pub use conversation::ConversationRepository;
pub use profile::ProfileRepository;
pub use settings::UserSettingsRepository;
pub use verification::VerificationRepository;

use std::sync::Arc;

use aivyra_shared::{envelope_message, ApiError, ApiResponse};

use crate::api::AivyraApi;
use crate::resource::Resource;
use crate::session::SessionStore;

pub const GENERIC_FAILURE: &str = "An error occurred";

/// The collaborators every repository is constructed with.
#[derive(Clone)]
pub(crate) struct Context {
    pub api: Arc<dyn AivyraApi>,
    pub session: Arc<dyn SessionStore>,
}

impl Context {
    pub fn new(api: Arc<dyn AivyraApi>, session: Arc<dyn SessionStore>) -> Self {
        Self { api, session }
    }

    /// `"Bearer <token>"` for protected calls; `None` means not logged in.
    pub async fn auth_header(&self) -> Option<String> {
        self.session.auth_header().await
    }
}

/// Default messages for one repository operation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Operation {
    pub name: &'static str,
    /// Used when the server rejects the call without a usable message.
    pub failure: &'static str,
    /// Used when the server reports success but omits required `data`.
    pub missing_data: &'static str,
    /// Guard for a transport error whose text is blank. Every [`ApiError`]
    /// displays with a prefix, so in practice the error text is surfaced.
    pub exception: &'static str,
}

impl Operation {
    pub const fn new(name: &'static str, failure: &'static str) -> Self {
        Self {
            name,
            failure,
            missing_data: failure,
            exception: GENERIC_FAILURE,
        }
    }

    pub const fn missing_data(mut self, message: &'static str) -> Self {
        self.missing_data = message;
        self
    }

    /// Accept only transport success with `success: true`.
    fn accept<T>(&self, result: Result<ApiResponse<T>, ApiError>) -> Result<ApiResponse<T>, String> {
        match result {
            Ok(envelope) if envelope.success => Ok(envelope),
            Ok(envelope) => {
                tracing::warn!(op = self.name, message = %envelope.message, "server reported failure");
                Err(envelope.message_or(self.failure))
            }
            Err(ApiError::Http { status, body }) => {
                tracing::warn!(op = self.name, status, "request rejected");
                Err(envelope_message(&body).unwrap_or_else(|| self.failure.to_string()))
            }
            Err(e) => {
                tracing::warn!(op = self.name, error = %e, "request failed");
                let message = e.to_string();
                Err(if message.trim().is_empty() {
                    self.exception.to_string()
                } else {
                    message
                })
            }
        }
    }

    /// The payload is required; a successful envelope without it is an error.
    pub fn data<T>(&self, result: Result<ApiResponse<T>, ApiError>) -> Resource<T> {
        match self.accept(result) {
            Ok(ApiResponse { data: Some(data), .. }) => Resource::Success(data),
            Ok(_) => {
                tracing::warn!(op = self.name, "success envelope without data");
                Resource::error(self.missing_data)
            }
            Err(message) => Resource::Error(message),
        }
    }

    /// A missing payload is read as the empty value (lists).
    pub fn data_or_default<T: Default>(&self, result: Result<ApiResponse<T>, ApiError>) -> Resource<T> {
        match self.accept(result) {
            Ok(envelope) => Resource::Success(envelope.data.unwrap_or_default()),
            Err(message) => Resource::Error(message),
        }
    }

    /// Success carries a fixed confirmation string.
    pub fn confirm<T>(&self, result: Result<ApiResponse<T>, ApiError>, confirmation: &str) -> Resource<String> {
        match self.accept(result) {
            Ok(_) => Resource::Success(confirmation.to_string()),
            Err(message) => Resource::Error(message),
        }
    }

    /// Success carries the server's message, or `fallback` when it is blank.
    pub fn server_message<T>(&self, result: Result<ApiResponse<T>, ApiError>, fallback: &str) -> Resource<String> {
        match self.accept(result) {
            Ok(envelope) => Resource::Success(envelope.message_or(fallback)),
            Err(message) => Resource::Error(message),
        }
    }
}
