//! `reqwest` implementation of [`AivyraApi`].

use std::borrow::Cow;

use aivyra_shared::{
    Ack, ApiError, AuthData, ChangePasswordRequest, ChatMessage, ChatSession, Conversation,
    CreateConversationRequest, ForgotPasswordRequest, LoginRequest, Message,
    ResetPasswordRequest, SendMessageRequest, SendVerificationCodeRequest,
    ShareConversationRequest, SharedConversation, SignupRequest, UpdateConversationRequest,
    UpdatePermissionRequest, UpdateUserSettingsRequest, User, UserSettings, VerifyCodeRequest,
    VerifyOtpRequest,
};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{AivyraApi, ApiResult};
use crate::config::ClientConfig;

/// HTTP client for the Aivyra backend.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

type Query<'a> = Vec<(&'static str, Cow<'a, str>)>;

impl HttpApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    async fn execute<TRes: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        auth: Option<&str>,
        query: Query<'_>,
        body: Option<Vec<u8>>,
    ) -> Result<TRes, ApiError> {
        let url = self.url(path);
        tracing::debug!(%method, %url, "api request");

        let mut rb = self.client.request(method.clone(), &url);
        if let Some(auth) = auth {
            rb = rb.header(AUTHORIZATION, auth);
        }
        if !query.is_empty() {
            rb = rb.query(&query);
        }
        if let Some(body) = body {
            rb = rb.header(CONTENT_TYPE, "application/json").body(body);
        }

        let resp = rb.send().await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "api request did not complete");
            ApiError::Network(e.to_string())
        })?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();
        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        if !is_success {
            tracing::warn!(%method, %url, status, "api request rejected");
            return Err(ApiError::Http { status, body: text });
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    async fn get<TRes: DeserializeOwned>(
        &self,
        path: &str,
        auth: &str,
        query: Query<'_>,
    ) -> Result<TRes, ApiError> {
        self.execute(Method::GET, path, Some(auth), query, None).await
    }

    async fn send_json<TReq: Serialize + ?Sized, TRes: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        auth: Option<&str>,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        let body = serde_json::to_vec(body).map_err(|e| ApiError::Serialize(e.to_string()))?;
        self.execute(method, path, auth, Vec::new(), Some(body)).await
    }

    async fn post_empty<TRes: DeserializeOwned>(
        &self,
        path: &str,
        auth: &str,
    ) -> Result<TRes, ApiError> {
        self.execute(Method::POST, path, Some(auth), Vec::new(), None)
            .await
    }

    async fn delete(&self, path: &str, auth: &str) -> Result<Ack, ApiError> {
        self.execute(Method::DELETE, path, Some(auth), Vec::new(), None)
            .await
    }
}

/// Percent-encode an id for use as a single path segment.
fn segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}

#[async_trait]
impl AivyraApi for HttpApiClient {
    async fn login(&self, request: &LoginRequest) -> ApiResult<AuthData> {
        self.send_json(Method::POST, "auth/login", None, request).await
    }

    async fn signup(&self, request: &SignupRequest) -> ApiResult<AuthData> {
        self.send_json(Method::POST, "auth/signup", None, request).await
    }

    async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<Ack, ApiError> {
        self.send_json(Method::POST, "auth/forgot-password", None, request)
            .await
    }

    async fn verify_otp(&self, request: &VerifyOtpRequest) -> Result<Ack, ApiError> {
        self.send_json(Method::POST, "auth/verify-otp", None, request)
            .await
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<Ack, ApiError> {
        self.send_json(Method::POST, "auth/reset-password", None, request)
            .await
    }

    async fn current_user(&self, auth: &str) -> ApiResult<User> {
        self.get("auth/me", auth, Vec::new()).await
    }

    async fn logout(&self, auth: &str) -> Result<Ack, ApiError> {
        self.post_empty("auth/logout", auth).await
    }

    async fn send_verification_code(
        &self,
        request: &SendVerificationCodeRequest,
    ) -> Result<Ack, ApiError> {
        self.send_json(Method::POST, "verification/send", None, request)
            .await
    }

    async fn verify_code(&self, request: &VerifyCodeRequest) -> Result<Ack, ApiError> {
        self.send_json(Method::POST, "verification/verify", None, request)
            .await
    }

    async fn resend_verification_code(
        &self,
        request: &SendVerificationCodeRequest,
    ) -> Result<Ack, ApiError> {
        self.send_json(Method::POST, "verification/resend", None, request)
            .await
    }

    async fn user_profile(&self, auth: &str) -> ApiResult<User> {
        self.get("user/profile", auth, Vec::new()).await
    }

    async fn update_profile(&self, auth: &str, user: &User) -> ApiResult<User> {
        self.send_json(Method::PUT, "user/profile", Some(auth), user)
            .await
    }

    async fn change_password(
        &self,
        auth: &str,
        request: &ChangePasswordRequest,
    ) -> Result<Ack, ApiError> {
        self.send_json(Method::PUT, "user/password", Some(auth), request)
            .await
    }

    async fn user_settings(&self, auth: &str) -> ApiResult<UserSettings> {
        self.get("user/settings", auth, Vec::new()).await
    }

    async fn update_user_settings(
        &self,
        auth: &str,
        request: &UpdateUserSettingsRequest,
    ) -> ApiResult<UserSettings> {
        self.send_json(Method::PUT, "user/settings", Some(auth), request)
            .await
    }

    async fn reset_user_settings(&self, auth: &str) -> ApiResult<UserSettings> {
        self.post_empty("user/settings/reset", auth).await
    }

    async fn conversations(
        &self,
        auth: &str,
        is_public: Option<bool>,
    ) -> ApiResult<Vec<Conversation>> {
        let mut query = Query::new();
        if let Some(is_public) = is_public {
            query.push(("isPublic", Cow::Owned(is_public.to_string())));
        }
        self.get("conversations", auth, query).await
    }

    async fn conversation(&self, auth: &str, conversation_id: &str) -> ApiResult<Conversation> {
        self.get(
            &format!("conversations/{}", segment(conversation_id)),
            auth,
            Vec::new(),
        )
        .await
    }

    async fn create_conversation(
        &self,
        auth: &str,
        request: &CreateConversationRequest,
    ) -> ApiResult<Conversation> {
        self.send_json(Method::POST, "conversations", Some(auth), request)
            .await
    }

    async fn update_conversation(
        &self,
        auth: &str,
        conversation_id: &str,
        request: &UpdateConversationRequest,
    ) -> ApiResult<Conversation> {
        self.send_json(
            Method::PUT,
            &format!("conversations/{}", segment(conversation_id)),
            Some(auth),
            request,
        )
        .await
    }

    async fn delete_conversation(
        &self,
        auth: &str,
        conversation_id: &str,
    ) -> Result<Ack, ApiError> {
        self.delete(&format!("conversations/{}", segment(conversation_id)), auth)
            .await
    }

    async fn messages(
        &self,
        auth: &str,
        conversation_id: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> ApiResult<Vec<Message>> {
        let mut query = Query::new();
        if let Some(limit) = limit {
            query.push(("limit", Cow::Owned(limit.to_string())));
        }
        if let Some(offset) = offset {
            query.push(("offset", Cow::Owned(offset.to_string())));
        }
        self.get(
            &format!("conversations/{}/messages", segment(conversation_id)),
            auth,
            query,
        )
        .await
    }

    async fn send_message(
        &self,
        auth: &str,
        conversation_id: &str,
        request: &SendMessageRequest,
    ) -> ApiResult<Message> {
        self.send_json(
            Method::POST,
            &format!("conversations/{}/messages", segment(conversation_id)),
            Some(auth),
            request,
        )
        .await
    }

    async fn delete_message(&self, auth: &str, message_id: &str) -> Result<Ack, ApiError> {
        self.delete(&format!("messages/{}", segment(message_id)), auth)
            .await
    }

    async fn conversation_shares(
        &self,
        auth: &str,
        conversation_id: &str,
    ) -> ApiResult<Vec<SharedConversation>> {
        self.get(
            &format!("conversations/{}/shares", segment(conversation_id)),
            auth,
            Vec::new(),
        )
        .await
    }

    async fn share_conversation(
        &self,
        auth: &str,
        request: &ShareConversationRequest,
    ) -> ApiResult<SharedConversation> {
        self.send_json(Method::POST, "conversations/share", Some(auth), request)
            .await
    }

    async fn update_share_permission(
        &self,
        auth: &str,
        share_id: &str,
        request: &UpdatePermissionRequest,
    ) -> ApiResult<SharedConversation> {
        self.send_json(
            Method::PUT,
            &format!("shares/{}/permission", segment(share_id)),
            Some(auth),
            request,
        )
        .await
    }

    async fn remove_share(&self, auth: &str, share_id: &str) -> Result<Ack, ApiError> {
        self.delete(&format!("shares/{}", segment(share_id)), auth)
            .await
    }

    async fn shared_with_me(&self, auth: &str) -> ApiResult<Vec<Conversation>> {
        self.get("conversations/shared-with-me", auth, Vec::new())
            .await
    }

    async fn chat_history(
        &self,
        auth: &str,
        session_id: Option<&str>,
    ) -> ApiResult<Vec<ChatMessage>> {
        let mut query = Query::new();
        if let Some(session_id) = session_id {
            query.push(("session_id", Cow::Borrowed(session_id)));
        }
        self.get("chat/history", auth, query).await
    }

    async fn chat_sessions(&self, auth: &str) -> ApiResult<Vec<ChatSession>> {
        self.get("chat/sessions", auth, Vec::new()).await
    }

    async fn delete_chat_session(&self, auth: &str, session_id: &str) -> Result<Ack, ApiError> {
        self.delete(&format!("chat/session/{}", segment(session_id)), auth)
            .await
    }
}
