//! Older chat-shaped surface over the conversation endpoints.

use std::sync::Arc;

use aivyra_shared::{ChatMessage, ChatSession, Message, SendMessageRequest};

use super::{Context, Operation};
use crate::api::AivyraApi;
use crate::resource::Resource;
use crate::session::SessionStore;

const SEND_MESSAGE: Operation = Operation::new("chat.send_message", "Failed to send message");
const HISTORY: Operation = Operation::new("chat.history", "Failed to load history");
const SESSIONS: Operation = Operation::new("chat.sessions", "Failed to load sessions");
const DELETE_SESSION: Operation = Operation::new("chat.delete_session", "Failed to delete session");

#[derive(Clone)]
pub struct ChatRepository {
    ctx: Context,
}

impl ChatRepository {
    pub fn new(api: Arc<dyn AivyraApi>, session: Arc<dyn SessionStore>) -> Self {
        Self {
            ctx: Context::new(api, session),
        }
    }

    /// Post a user message to `conversation_id`.
    pub async fn send_message(&self, message: &str, conversation_id: &str) -> Resource<Message> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        let request = SendMessageRequest::user(message);
        SEND_MESSAGE.data(
            self.ctx
                .api
                .send_message(&auth, conversation_id, &request)
                .await,
        )
    }

    pub async fn chat_history(&self, session_id: Option<&str>) -> Resource<Vec<ChatMessage>> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        HISTORY.data_or_default(self.ctx.api.chat_history(&auth, session_id).await)
    }

    pub async fn chat_sessions(&self) -> Resource<Vec<ChatSession>> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        SESSIONS.data_or_default(self.ctx.api.chat_sessions(&auth).await)
    }

    pub async fn delete_session(&self, session_id: &str) -> Resource<String> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        DELETE_SESSION.confirm(
            self.ctx.api.delete_chat_session(&auth, session_id).await,
            "Session deleted successfully",
        )
    }
}
