//! Backend data models and request bodies for the Aivyra API.
//!
//! Every server-owned enum carries an `Unknown` catch-all so a value added on
//! the backend degrades to `Unknown` instead of failing the whole payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Users & Auth ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Student,
    #[default]
    General,
    Admin,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload of a successful login or signup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthData {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

/// The backend reads `new_password` in snake case on this one endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    #[serde(rename = "new_password")]
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

// --- Verification ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CodeType {
    #[default]
    EmailVerification,
    PasswordReset,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationCode {
    pub id: String,
    pub code: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "type", default)]
    pub code_type: CodeType,
    pub expires_at: DateTime<Utc>,
    #[serde(default)]
    pub used: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SendVerificationCodeRequest {
    pub email: String,
    #[serde(rename = "type", default)]
    pub code_type: CodeType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerifyCodeRequest {
    pub email: String,
    pub code: String,
    #[serde(rename = "type", default)]
    pub code_type: CodeType,
}

// --- Conversations & Messages ---

pub const DEFAULT_CONVERSATION_TITLE: &str = "New Conversation";

fn default_conversation_title() -> String {
    DEFAULT_CONVERSATION_TITLE.to_string()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageRole {
    #[default]
    User,
    Assistant,
    System,
    #[serde(other)]
    Unknown,
}

/// A single chat message. Immutable once created; append-only per conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub content: String,
    pub role: MessageRole,
    pub conversation_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    #[serde(default = "default_conversation_title")]
    pub title: String,
    pub user_id: String,
    #[serde(default)]
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Only populated by endpoints that embed the message list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Message>>,
}

/// Legacy `chat/*` endpoints return these shapes under the older names.
pub type ChatMessage = Message;
pub type ChatSession = Conversation;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    #[default]
    View,
    Edit,
    #[serde(other)]
    Unknown,
}

/// Access grant between a conversation and another user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SharedConversation {
    pub id: String,
    pub conversation_id: String,
    pub shared_with_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_by_id: Option<String>,
    #[serde(default)]
    pub permission: Permission,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateConversationRequest {
    pub title: String,
    pub is_public: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConversationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub role: MessageRole,
}

impl SendMessageRequest {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            conversation_id: None,
            role: MessageRole::User,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShareConversationRequest {
    pub conversation_id: String,
    pub shared_with_id: String,
    #[serde(default)]
    pub permission: Permission,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdatePermissionRequest {
    pub permission: Permission,
}

// --- Settings ---

fn default_theme() -> String {
    "dark".to_string()
}

fn default_font_size() -> u32 {
    16
}

fn default_language() -> String {
    "en".to_string()
}

fn default_ai_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    2048
}

fn yes() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub id: String,
    pub user_id: String,

    // Appearance
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    #[serde(default)]
    pub compact_mode: bool,

    // Notifications
    #[serde(default = "yes")]
    pub email_notifications: bool,
    #[serde(default)]
    pub push_notifications: bool,
    #[serde(default = "yes")]
    pub sound_enabled: bool,
    #[serde(default)]
    pub desktop_notifications: bool,

    // Privacy
    #[serde(default = "yes")]
    pub show_online_status: bool,
    #[serde(default = "yes")]
    pub allow_analytics: bool,
    #[serde(default)]
    pub share_usage_data: bool,

    // Chat
    #[serde(default = "yes")]
    pub auto_save: bool,
    #[serde(default = "yes")]
    pub show_timestamps: bool,
    #[serde(default = "yes")]
    pub enter_to_send: bool,
    #[serde(default = "default_language")]
    pub language: String,

    // AI
    #[serde(default = "default_ai_model")]
    pub ai_model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial settings update. Only the populated fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserSettingsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compact_mode: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_notifications: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_notifications: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop_notifications: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_online_status: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_analytics: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_usage_data: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_save: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_timestamps: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enter_to_send: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl UpdateUserSettingsRequest {
    /// True when no field is set; such a request is a no-op on the server.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
