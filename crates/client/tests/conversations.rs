mod support;

use aivyra_client::shared::{MessageRole, Permission};
use aivyra_client::Resource;
use axum::http::{Method, StatusCode};
use serde_json::json;
use support::{conversation_json, message_json, share_json, MockBackend};

#[tokio::test]
async fn protected_calls_short_circuit_without_token() {
    let backend = MockBackend::start().await;
    let (client, _) = backend.client();
    let repo = &client.conversations;

    let not_authenticated = Some("Not authenticated");
    assert_eq!(repo.conversations(None).await.error_message(), not_authenticated);
    assert_eq!(repo.conversation("c_1").await.error_message(), not_authenticated);
    assert_eq!(repo.create_conversation("t", false).await.error_message(), not_authenticated);
    assert_eq!(
        repo.update_conversation("c_1", Some("t"), None).await.error_message(),
        not_authenticated
    );
    assert_eq!(repo.delete_conversation("c_1").await.error_message(), not_authenticated);
    assert_eq!(repo.messages("c_1", None, None).await.error_message(), not_authenticated);
    assert_eq!(
        repo.send_message("c_1", "hi", MessageRole::User).await.error_message(),
        not_authenticated
    );
    assert_eq!(repo.delete_message("m_1").await.error_message(), not_authenticated);
    assert_eq!(repo.conversation_shares("c_1").await.error_message(), not_authenticated);
    assert_eq!(
        repo.share_conversation("c_1", "u_2", Permission::View).await.error_message(),
        not_authenticated
    );
    assert_eq!(
        repo.update_share_permission("sh_1", Permission::Edit).await.error_message(),
        not_authenticated
    );
    assert_eq!(repo.remove_share("sh_1").await.error_message(), not_authenticated);
    assert_eq!(repo.shared_with_me().await.error_message(), not_authenticated);

    let chat = &client.chat;
    assert_eq!(chat.send_message("hi", "c_1").await.error_message(), not_authenticated);
    assert_eq!(chat.chat_history(None).await.error_message(), not_authenticated);
    assert_eq!(chat.chat_sessions().await.error_message(), not_authenticated);
    assert_eq!(chat.delete_session("c_1").await.error_message(), not_authenticated);

    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn list_conversations_with_visibility_filter() {
    let backend = MockBackend::start().await;
    backend.ok(
        Method::GET,
        "conversations",
        json!([conversation_json("c_1", "Essay"), conversation_json("c_2", "Maths")]),
    );
    let (client, _) = backend.logged_in_client().await;

    let all = client.conversations.conversations(None).await.into_data().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].title, "Maths");
    assert_eq!(backend.last_request().query, None);

    client.conversations.conversations(Some(true)).await;
    assert_eq!(backend.last_request().query.as_deref(), Some("isPublic=true"));
}

#[tokio::test]
async fn missing_list_data_is_empty() {
    let backend = MockBackend::start().await;
    backend.stub(
        Method::GET,
        "conversations/shared-with-me",
        StatusCode::OK,
        json!({"success": true, "message": "nothing shared"}),
    );
    let (client, _) = backend.logged_in_client().await;

    assert_eq!(client.conversations.shared_with_me().await, Resource::Success(Vec::new()));
}

#[tokio::test]
async fn get_conversation_messages() {
    let backend = MockBackend::start().await;
    let mut conversation = conversation_json("c_1", "Essay");
    conversation["messages"] = json!([
        message_json("m_1", "c_1", "Hello", "USER"),
        message_json("m_2", "c_1", "Hi! How can I help?", "ASSISTANT"),
    ]);
    backend.ok(Method::GET, "conversations/c_1", conversation);
    let (client, _) = backend.logged_in_client().await;

    let conversation = client.conversations.conversation("c_1").await.into_data().unwrap();
    let messages = conversation.messages.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].role, MessageRole::Assistant);
}

#[tokio::test]
async fn get_conversation_without_data_is_not_found() {
    let backend = MockBackend::start().await;
    backend.ok(Method::GET, "conversations/c_missing", json!(null));
    backend.reject(Method::GET, "conversations/c_gone", "");
    let (client, _) = backend.logged_in_client().await;

    assert_eq!(
        client.conversations.conversation("c_missing").await,
        Resource::error("Conversation not found")
    );
    assert_eq!(
        client.conversations.conversation("c_gone").await,
        Resource::error("Failed to load conversation")
    );
}

#[tokio::test]
async fn create_update_delete() {
    let backend = MockBackend::start().await;
    backend.ok(Method::POST, "conversations", conversation_json("c_9", "Trip plan"));
    backend.ok(Method::PUT, "conversations/c_9", conversation_json("c_9", "Renamed"));
    backend.stub(
        Method::DELETE,
        "conversations/c_9",
        StatusCode::OK,
        json!({"success": true, "message": "gone"}),
    );
    let (client, _) = backend.logged_in_client().await;
    let repo = &client.conversations;

    let created = repo.create_conversation("Trip plan", true).await.into_data().unwrap();
    assert_eq!(created.id, "c_9");
    assert_eq!(
        backend.last_request().body,
        Some(json!({"title": "Trip plan", "isPublic": true}))
    );

    let renamed = repo
        .update_conversation("c_9", Some("Renamed"), None)
        .await
        .into_data()
        .unwrap();
    assert_eq!(renamed.title, "Renamed");
    assert_eq!(backend.last_request().body, Some(json!({"title": "Renamed"})));

    assert_eq!(
        repo.delete_conversation("c_9").await,
        Resource::Success("Conversation deleted successfully".to_string())
    );
    assert_eq!(backend.last_request().method, Method::DELETE);
}

#[tokio::test]
async fn messages_paginate_and_send() {
    let backend = MockBackend::start().await;
    backend.ok(
        Method::GET,
        "conversations/c_1/messages",
        json!([message_json("m_1", "c_1", "Hello", "USER")]),
    );
    backend.ok(
        Method::POST,
        "conversations/c_1/messages",
        message_json("m_2", "c_1", "Summarise this", "USER"),
    );
    backend.reject(Method::DELETE, "messages/m_2", "Message not found");
    let (client, _) = backend.logged_in_client().await;
    let repo = &client.conversations;

    let page = repo.messages("c_1", Some(20), Some(40)).await.into_data().unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(backend.last_request().query.as_deref(), Some("limit=20&offset=40"));

    let sent = repo
        .send_message("c_1", "Summarise this", MessageRole::User)
        .await
        .into_data()
        .unwrap();
    assert_eq!(sent.id, "m_2");
    assert_eq!(
        backend.last_request().body,
        Some(json!({"content": "Summarise this", "conversationId": "c_1", "role": "USER"}))
    );

    assert_eq!(
        repo.delete_message("m_2").await,
        Resource::error("Message not found")
    );
}

#[tokio::test]
async fn sharing_lifecycle() {
    let backend = MockBackend::start().await;
    backend.ok(
        Method::POST,
        "conversations/share",
        share_json("sh_1", "c_1", "VIEW"),
    );
    backend.ok(
        Method::PUT,
        "shares/sh_1/permission",
        share_json("sh_1", "c_1", "EDIT"),
    );
    backend.ok(
        Method::GET,
        "conversations/c_1/shares",
        json!([share_json("sh_1", "c_1", "EDIT"), share_json("sh_2", "c_1", "COMMENT")]),
    );
    backend.stub(
        Method::DELETE,
        "shares/sh_1",
        StatusCode::OK,
        json!({"success": true, "message": ""}),
    );
    let (client, _) = backend.logged_in_client().await;
    let repo = &client.conversations;

    let share = repo
        .share_conversation("c_1", "u_2", Permission::View)
        .await
        .into_data()
        .unwrap();
    assert_eq!(share.permission, Permission::View);
    assert_eq!(
        backend.last_request().body,
        Some(json!({"conversationId": "c_1", "sharedWithId": "u_2", "permission": "VIEW"}))
    );

    let updated = repo
        .update_share_permission("sh_1", Permission::Edit)
        .await
        .into_data()
        .unwrap();
    assert_eq!(updated.permission, Permission::Edit);
    assert_eq!(backend.last_request().body, Some(json!({"permission": "EDIT"})));

    let shares = repo.conversation_shares("c_1").await.into_data().unwrap();
    assert_eq!(shares[1].permission, Permission::Unknown);

    assert_eq!(
        repo.remove_share("sh_1").await,
        Resource::Success("Share removed successfully".to_string())
    );
}

#[tokio::test]
async fn path_ids_are_percent_encoded() {
    let backend = MockBackend::start().await;
    backend.ok(
        Method::GET,
        "conversations/a%20b",
        conversation_json("a b", "Spaced"),
    );
    let (client, _) = backend.logged_in_client().await;

    let conversation = client.conversations.conversation("a b").await.into_data().unwrap();
    assert_eq!(conversation.id, "a b");
}

#[tokio::test]
async fn legacy_chat_aliases() {
    let backend = MockBackend::start().await;
    backend.ok(
        Method::GET,
        "chat/history",
        json!([message_json("m_1", "c_1", "Hello", "USER")]),
    );
    backend.ok(
        Method::GET,
        "chat/sessions",
        json!([conversation_json("c_1", "Essay")]),
    );
    backend.ok(
        Method::POST,
        "conversations/c_1/messages",
        message_json("m_3", "c_1", "Next question", "USER"),
    );
    backend.reject(Method::DELETE, "chat/session/c_1", "");
    let (client, _) = backend.logged_in_client().await;
    let chat = &client.chat;

    let history = chat.chat_history(Some("c_1")).await.into_data().unwrap();
    assert_eq!(history[0].content, "Hello");
    assert_eq!(backend.last_request().query.as_deref(), Some("session_id=c_1"));

    let sessions = chat.chat_sessions().await.into_data().unwrap();
    assert_eq!(sessions[0].id, "c_1");

    let sent = chat.send_message("Next question", "c_1").await.into_data().unwrap();
    assert_eq!(sent.id, "m_3");
    assert_eq!(
        backend.last_request().body,
        Some(json!({"content": "Next question", "role": "USER"}))
    );

    assert_eq!(
        chat.delete_session("c_1").await,
        Resource::error("Failed to delete session")
    );
}
