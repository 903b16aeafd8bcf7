//! In-process mock of the Aivyra backend.
//!
//! Serves stubbed envelopes on 127.0.0.1 and records every request it sees.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use aivyra_client::{AivyraClient, ClientConfig, HttpApiClient, LocalSessionStore, SessionStore};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};

pub const TOKEN: &str = "tok_abc123";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    /// Path below `/api/`, e.g. `auth/login`.
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

type StubKey = (Method, String);

#[derive(Default)]
struct MockState {
    stubs: Mutex<HashMap<StubKey, (StatusCode, Value)>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct MockBackend {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api/", self.addr)
    }

    /// Answer `method path` with a raw status and JSON body.
    pub fn stub(&self, method: Method, path: &str, status: StatusCode, body: Value) {
        self.state
            .stubs
            .lock()
            .unwrap()
            .insert((method, path.to_string()), (status, body));
    }

    /// Answer with `{"success": true, "message": "", "data": data}`.
    pub fn ok(&self, method: Method, path: &str, data: Value) {
        self.stub(
            method,
            path,
            StatusCode::OK,
            json!({"success": true, "message": "", "data": data}),
        );
    }

    /// Answer 200 with `{"success": false, "message": message}`.
    pub fn reject(&self, method: Method, path: &str, message: &str) {
        self.stub(
            method,
            path,
            StatusCode::OK,
            json!({"success": false, "message": message}),
        );
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("no request recorded")
    }

    /// A client wired to this backend with an empty in-memory session.
    pub fn client(&self) -> (AivyraClient, Arc<LocalSessionStore>) {
        client_for(&self.base_url())
    }

    /// Same as [`MockBackend::client`], with a token already stored.
    pub async fn logged_in_client(&self) -> (AivyraClient, Arc<LocalSessionStore>) {
        let (client, session) = self.client();
        session.save_login(TOKEN, "u_1", "ada@example.com").await;
        (client, session)
    }
}

pub fn client_for(base_url: &str) -> (AivyraClient, Arc<LocalSessionStore>) {
    let config = ClientConfig::with_store_dir(base_url, std::env::temp_dir()).unwrap();
    let api = Arc::new(HttpApiClient::new(&config).unwrap());
    let session = Arc::new(LocalSessionStore::in_memory());
    (AivyraClient::from_parts(api, session.clone()), session)
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/")
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri
        .path()
        .trim_start_matches("/api/")
        .to_string();

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).ok(),
    });

    let stub = state.stubs.lock().unwrap().get(&(method, path)).cloned();
    match stub {
        Some((status, body)) => (status, Json(body)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

// --- Fixtures ---

pub const TS: &str = "2025-01-02T03:04:05Z";

pub fn user_json(id: &str, email: &str) -> Value {
    json!({
        "id": id,
        "name": "Ada Lovelace",
        "email": email,
        "role": "GENERAL",
        "emailVerified": true,
        "createdAt": TS,
        "updatedAt": TS
    })
}

pub fn auth_json(token: &str, id: &str, email: &str) -> Value {
    json!({"user": user_json(id, email), "token": token})
}

pub fn conversation_json(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "userId": "u_1",
        "isPublic": false,
        "createdAt": TS,
        "updatedAt": TS
    })
}

pub fn message_json(id: &str, conversation_id: &str, content: &str, role: &str) -> Value {
    json!({
        "id": id,
        "content": content,
        "role": role,
        "conversationId": conversation_id,
        "userId": "u_1",
        "createdAt": TS
    })
}

pub fn share_json(id: &str, conversation_id: &str, permission: &str) -> Value {
    json!({
        "id": id,
        "conversationId": conversation_id,
        "sharedWithId": "u_2",
        "sharedById": "u_1",
        "permission": permission,
        "createdAt": TS
    })
}

pub fn settings_json(theme: &str) -> Value {
    json!({
        "id": "s_1",
        "userId": "u_1",
        "theme": theme,
        "createdAt": TS,
        "updatedAt": TS
    })
}
