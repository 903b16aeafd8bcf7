//! Conversations, their messages, and sharing grants.

use std::sync::Arc;

use aivyra_shared::{
    Conversation, CreateConversationRequest, Message, MessageRole, Permission,
    SendMessageRequest, ShareConversationRequest, SharedConversation,
    UpdateConversationRequest, UpdatePermissionRequest,
};

use super::{Context, Operation};
use crate::api::AivyraApi;
use crate::resource::Resource;
use crate::session::SessionStore;

const LIST: Operation = Operation::new("conversations.list", "Failed to load conversations");
const GET: Operation =
    Operation::new("conversations.get", "Failed to load conversation").missing_data("Conversation not found");
const CREATE: Operation = Operation::new("conversations.create", "Failed to create conversation");
const UPDATE: Operation = Operation::new("conversations.update", "Failed to update conversation");
const DELETE: Operation = Operation::new("conversations.delete", "Failed to delete conversation");

const MESSAGES: Operation = Operation::new("messages.list", "Failed to load messages");
const SEND_MESSAGE: Operation = Operation::new("messages.send", "Failed to send message");
const DELETE_MESSAGE: Operation = Operation::new("messages.delete", "Failed to delete message");

const SHARES: Operation = Operation::new("shares.list", "Failed to load shares");
const SHARE: Operation = Operation::new("shares.create", "Failed to share conversation");
const UPDATE_PERMISSION: Operation = Operation::new("shares.update", "Failed to update permission");
const REMOVE_SHARE: Operation = Operation::new("shares.remove", "Failed to remove share");
const SHARED_WITH_ME: Operation =
    Operation::new("shares.with_me", "Failed to load shared conversations");

#[derive(Clone)]
pub struct ConversationRepository {
    ctx: Context,
}

impl ConversationRepository {
    pub fn new(api: Arc<dyn AivyraApi>, session: Arc<dyn SessionStore>) -> Self {
        Self {
            ctx: Context::new(api, session),
        }
    }

    // --- Conversations ---

    /// All conversations visible to the user, optionally filtered by visibility.
    pub async fn conversations(&self, is_public: Option<bool>) -> Resource<Vec<Conversation>> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        LIST.data_or_default(self.ctx.api.conversations(&auth, is_public).await)
    }

    pub async fn conversation(&self, conversation_id: &str) -> Resource<Conversation> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        GET.data(self.ctx.api.conversation(&auth, conversation_id).await)
    }

    pub async fn create_conversation(&self, title: &str, is_public: bool) -> Resource<Conversation> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        let request = CreateConversationRequest {
            title: title.to_string(),
            is_public,
        };
        CREATE.data(self.ctx.api.create_conversation(&auth, &request).await)
    }

    /// Rename and/or change visibility. `None` leaves a field as it is.
    pub async fn update_conversation(
        &self,
        conversation_id: &str,
        title: Option<&str>,
        is_public: Option<bool>,
    ) -> Resource<Conversation> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        let request = UpdateConversationRequest {
            title: title.map(str::to_string),
            is_public,
        };
        UPDATE.data(
            self.ctx
                .api
                .update_conversation(&auth, conversation_id, &request)
                .await,
        )
    }

    pub async fn delete_conversation(&self, conversation_id: &str) -> Resource<String> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        DELETE.confirm(
            self.ctx.api.delete_conversation(&auth, conversation_id).await,
            "Conversation deleted successfully",
        )
    }

    // --- Messages ---

    pub async fn messages(
        &self,
        conversation_id: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Resource<Vec<Message>> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        MESSAGES.data_or_default(
            self.ctx
                .api
                .messages(&auth, conversation_id, limit, offset)
                .await,
        )
    }

    pub async fn send_message(
        &self,
        conversation_id: &str,
        content: &str,
        role: MessageRole,
    ) -> Resource<Message> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        let request = SendMessageRequest {
            content: content.to_string(),
            conversation_id: Some(conversation_id.to_string()),
            role,
        };
        SEND_MESSAGE.data(
            self.ctx
                .api
                .send_message(&auth, conversation_id, &request)
                .await,
        )
    }

    pub async fn delete_message(&self, message_id: &str) -> Resource<String> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        DELETE_MESSAGE.confirm(
            self.ctx.api.delete_message(&auth, message_id).await,
            "Message deleted successfully",
        )
    }

    // --- Sharing ---

    pub async fn conversation_shares(&self, conversation_id: &str) -> Resource<Vec<SharedConversation>> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        SHARES.data_or_default(self.ctx.api.conversation_shares(&auth, conversation_id).await)
    }

    pub async fn share_conversation(
        &self,
        conversation_id: &str,
        shared_with_id: &str,
        permission: Permission,
    ) -> Resource<SharedConversation> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        let request = ShareConversationRequest {
            conversation_id: conversation_id.to_string(),
            shared_with_id: shared_with_id.to_string(),
            permission,
        };
        SHARE.data(self.ctx.api.share_conversation(&auth, &request).await)
    }

    pub async fn update_share_permission(
        &self,
        share_id: &str,
        permission: Permission,
    ) -> Resource<SharedConversation> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        let request = UpdatePermissionRequest { permission };
        UPDATE_PERMISSION.data(
            self.ctx
                .api
                .update_share_permission(&auth, share_id, &request)
                .await,
        )
    }

    pub async fn remove_share(&self, share_id: &str) -> Resource<String> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        REMOVE_SHARE.confirm(
            self.ctx.api.remove_share(&auth, share_id).await,
            "Share removed successfully",
        )
    }

    /// Conversations other users have shared with the current user.
    pub async fn shared_with_me(&self) -> Resource<Vec<Conversation>> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        SHARED_WITH_ME.data_or_default(self.ctx.api.shared_with_me(&auth).await)
    }
}
