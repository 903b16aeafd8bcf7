//! Login, signup, password recovery and logout.

use std::sync::Arc;

use aivyra_shared::{
    ApiError, AuthData, ForgotPasswordRequest, LoginRequest, ResetPasswordRequest,
    SignupRequest, User, VerifyOtpRequest,
};
use tokio::sync::watch;

use super::{Context, Operation};
use crate::api::AivyraApi;
use crate::resource::Resource;
use crate::session::{Session, SessionStore};

const LOGIN: Operation =
    Operation::new("login", "Login failed").missing_data("Login failed: No data received");
const SIGNUP: Operation =
    Operation::new("signup", "Signup failed").missing_data("Signup failed: No data received");
const FORGOT_PASSWORD: Operation = Operation::new("forgot_password", "Failed to send OTP");
const VERIFY_OTP: Operation = Operation::new("verify_otp", "Invalid OTP");
const RESET_PASSWORD: Operation = Operation::new("reset_password", "Failed to reset password");
const CURRENT_USER: Operation =
    Operation::new("current_user", "Failed to get user").missing_data("Failed to get user data");

pub const LOGGED_OUT: &str = "Logged out successfully";
/// Logout result when the server could not be reached.
pub const LOGGED_OUT_LOCALLY: &str = "Logged out";

#[derive(Clone)]
pub struct AuthRepository {
    ctx: Context,
}

impl AuthRepository {
    pub fn new(api: Arc<dyn AivyraApi>, session: Arc<dyn SessionStore>) -> Self {
        Self {
            ctx: Context::new(api, session),
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Resource<AuthData> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let result = LOGIN.data(self.ctx.api.login(&request).await);
        self.remember(result).await
    }

    pub async fn signup(&self, email: &str, password: &str, name: &str) -> Resource<AuthData> {
        let request = SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        };
        let result = SIGNUP.data(self.ctx.api.signup(&request).await);
        self.remember(result).await
    }

    /// Persist the session from a successful login or signup.
    async fn remember(&self, result: Resource<AuthData>) -> Resource<AuthData> {
        if let Resource::Success(auth) = &result {
            self.ctx
                .session
                .save_login(&auth.token, &auth.user.id, &auth.user.email)
                .await;
            tracing::info!(user_id = %auth.user.id, "signed in");
        }
        result
    }

    pub async fn forgot_password(&self, email: &str) -> Resource<String> {
        let request = ForgotPasswordRequest {
            email: email.to_string(),
        };
        FORGOT_PASSWORD.server_message(
            self.ctx.api.forgot_password(&request).await,
            "OTP sent successfully",
        )
    }

    pub async fn verify_otp(&self, email: &str, otp: &str) -> Resource<String> {
        let request = VerifyOtpRequest {
            email: email.to_string(),
            otp: otp.to_string(),
        };
        VERIFY_OTP.server_message(
            self.ctx.api.verify_otp(&request).await,
            "OTP verified successfully",
        )
    }

    pub async fn reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> Resource<String> {
        let request = ResetPasswordRequest {
            email: email.to_string(),
            otp: otp.to_string(),
            new_password: new_password.to_string(),
        };
        RESET_PASSWORD.server_message(
            self.ctx.api.reset_password(&request).await,
            "Password reset successfully",
        )
    }

    /// Log out locally, telling the server when a token is stored.
    ///
    /// Always clears the session and always succeeds. Any server answer,
    /// including a rejection, yields [`LOGGED_OUT`]; a call that never got an
    /// answer yields [`LOGGED_OUT_LOCALLY`].
    pub async fn logout(&self) -> Resource<String> {
        let mut message = LOGGED_OUT;

        if let Some(auth) = self.ctx.auth_header().await {
            match self.ctx.api.logout(&auth).await {
                Ok(envelope) if !envelope.success => {
                    tracing::warn!(message = %envelope.message, "server refused logout");
                }
                Ok(_) => {}
                Err(ApiError::Http { status, .. }) => {
                    tracing::warn!(status, "server rejected logout");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "logout request failed; clearing local session anyway");
                    message = LOGGED_OUT_LOCALLY;
                }
            }
        }

        self.ctx.session.clear_all().await;
        tracing::info!("signed out");
        Resource::Success(message.to_string())
    }

    /// Local session flag; makes no request.
    pub async fn is_logged_in(&self) -> bool {
        self.ctx.session.is_logged_in().await
    }

    /// Observe login state changes.
    pub fn session_changes(&self) -> watch::Receiver<Session> {
        self.ctx.session.subscribe()
    }

    pub async fn current_user(&self) -> Resource<User> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        CURRENT_USER.data(self.ctx.api.current_user(&auth).await)
    }
}
