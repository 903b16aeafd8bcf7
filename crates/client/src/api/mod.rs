//! Declarative description of every backend endpoint.
//!
//! Paths are relative to the configured `/api/` root. Protected calls take the
//! full `Authorization` header value (`"Bearer <token>"`) as `auth`.

mod http;

pub use http::HttpApiClient;

use aivyra_shared::{
    Ack, ApiError, ApiResponse, AuthData, ChangePasswordRequest, ChatMessage, ChatSession,
    Conversation, CreateConversationRequest, ForgotPasswordRequest, LoginRequest, Message,
    ResetPasswordRequest, SendMessageRequest, SendVerificationCodeRequest,
    ShareConversationRequest, SharedConversation, SignupRequest, UpdateConversationRequest,
    UpdatePermissionRequest, UpdateUserSettingsRequest, User, UserSettings, VerifyCodeRequest,
    VerifyOtpRequest,
};
use async_trait::async_trait;

pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

#[async_trait]
pub trait AivyraApi: Send + Sync {
    // --- Authentication ---

    /// `POST auth/login`
    async fn login(&self, request: &LoginRequest) -> ApiResult<AuthData>;
    /// `POST auth/signup`
    async fn signup(&self, request: &SignupRequest) -> ApiResult<AuthData>;
    /// `POST auth/forgot-password`
    async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<Ack, ApiError>;
    /// `POST auth/verify-otp`
    async fn verify_otp(&self, request: &VerifyOtpRequest) -> Result<Ack, ApiError>;
    /// `POST auth/reset-password`
    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<Ack, ApiError>;
    /// `GET auth/me`
    async fn current_user(&self, auth: &str) -> ApiResult<User>;
    /// `POST auth/logout`
    async fn logout(&self, auth: &str) -> Result<Ack, ApiError>;

    // --- Verification ---

    /// `POST verification/send`
    async fn send_verification_code(
        &self,
        request: &SendVerificationCodeRequest,
    ) -> Result<Ack, ApiError>;
    /// `POST verification/verify`
    async fn verify_code(&self, request: &VerifyCodeRequest) -> Result<Ack, ApiError>;
    /// `POST verification/resend`
    async fn resend_verification_code(
        &self,
        request: &SendVerificationCodeRequest,
    ) -> Result<Ack, ApiError>;

    // --- Profile & Settings ---

    /// `GET user/profile`
    async fn user_profile(&self, auth: &str) -> ApiResult<User>;
    /// `PUT user/profile`
    async fn update_profile(&self, auth: &str, user: &User) -> ApiResult<User>;
    /// `PUT user/password`
    async fn change_password(
        &self,
        auth: &str,
        request: &ChangePasswordRequest,
    ) -> Result<Ack, ApiError>;
    /// `GET user/settings`
    async fn user_settings(&self, auth: &str) -> ApiResult<UserSettings>;
    /// `PUT user/settings`
    async fn update_user_settings(
        &self,
        auth: &str,
        request: &UpdateUserSettingsRequest,
    ) -> ApiResult<UserSettings>;
    /// `POST user/settings/reset`
    async fn reset_user_settings(&self, auth: &str) -> ApiResult<UserSettings>;

    // --- Conversations ---

    /// `GET conversations[?isPublic=]`
    async fn conversations(&self, auth: &str, is_public: Option<bool>)
        -> ApiResult<Vec<Conversation>>;
    /// `GET conversations/{id}`
    async fn conversation(&self, auth: &str, conversation_id: &str) -> ApiResult<Conversation>;
    /// `POST conversations`
    async fn create_conversation(
        &self,
        auth: &str,
        request: &CreateConversationRequest,
    ) -> ApiResult<Conversation>;
    /// `PUT conversations/{id}`
    async fn update_conversation(
        &self,
        auth: &str,
        conversation_id: &str,
        request: &UpdateConversationRequest,
    ) -> ApiResult<Conversation>;
    /// `DELETE conversations/{id}`
    async fn delete_conversation(&self, auth: &str, conversation_id: &str)
        -> Result<Ack, ApiError>;

    // --- Messages ---

    /// `GET conversations/{id}/messages[?limit=&offset=]`
    async fn messages(
        &self,
        auth: &str,
        conversation_id: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> ApiResult<Vec<Message>>;
    /// `POST conversations/{id}/messages`
    async fn send_message(
        &self,
        auth: &str,
        conversation_id: &str,
        request: &SendMessageRequest,
    ) -> ApiResult<Message>;
    /// `DELETE messages/{id}`
    async fn delete_message(&self, auth: &str, message_id: &str) -> Result<Ack, ApiError>;

    // --- Sharing ---

    /// `GET conversations/{id}/shares`
    async fn conversation_shares(
        &self,
        auth: &str,
        conversation_id: &str,
    ) -> ApiResult<Vec<SharedConversation>>;
    /// `POST conversations/share`
    async fn share_conversation(
        &self,
        auth: &str,
        request: &ShareConversationRequest,
    ) -> ApiResult<SharedConversation>;
    /// `PUT shares/{id}/permission`
    async fn update_share_permission(
        &self,
        auth: &str,
        share_id: &str,
        request: &UpdatePermissionRequest,
    ) -> ApiResult<SharedConversation>;
    /// `DELETE shares/{id}`
    async fn remove_share(&self, auth: &str, share_id: &str) -> Result<Ack, ApiError>;
    /// `GET conversations/shared-with-me`
    async fn shared_with_me(&self, auth: &str) -> ApiResult<Vec<Conversation>>;

    // --- Legacy chat aliases ---

    /// `GET chat/history[?session_id=]`
    async fn chat_history(&self, auth: &str, session_id: Option<&str>)
        -> ApiResult<Vec<ChatMessage>>;
    /// `GET chat/sessions`
    async fn chat_sessions(&self, auth: &str) -> ApiResult<Vec<ChatSession>>;
    /// `DELETE chat/session/{id}`
    async fn delete_chat_session(&self, auth: &str, session_id: &str) -> Result<Ack, ApiError>;
}
