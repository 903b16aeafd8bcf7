//! Persistent session store: auth token, user id/email and the login flag.
//!
//! Repositories receive the store as `Arc<dyn SessionStore>`; nothing reads
//! session state from a global.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::{watch, Mutex};

use crate::storage;

pub const AUTH_HEADER_PREFIX: &str = "Bearer ";

/// Stored session data. Empty on first launch and after logout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    pub is_logged_in: bool,
}

impl Session {
    /// `Authorization` header value for the stored token.
    pub fn auth_header(&self) -> Option<String> {
        self.auth_token
            .as_ref()
            .map(|token| format!("{AUTH_HEADER_PREFIX}{token}"))
    }
}

/// Durable key-value store holding the current login state.
///
/// Persistence failures are logged and otherwise swallowed: a value that
/// cannot be read back is treated as "never logged in".
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Upsert the token field.
    async fn save_auth_token(&self, token: &str);

    /// Upsert user id and email and set the login flag, in one write.
    async fn save_user_data(&self, user_id: &str, email: &str);

    /// Write token, user id, email and the login flag together.
    async fn save_login(&self, token: &str, user_id: &str, email: &str);

    /// Remove every stored field.
    async fn clear_all(&self);

    /// Point-in-time copy of all fields.
    async fn snapshot(&self) -> Session;

    /// Observe the session. The receiver starts at the current value.
    fn subscribe(&self) -> watch::Receiver<Session>;

    async fn auth_token(&self) -> Option<String> {
        self.snapshot().await.auth_token
    }

    async fn user_id(&self) -> Option<String> {
        self.snapshot().await.user_id
    }

    async fn user_email(&self) -> Option<String> {
        self.snapshot().await.user_email
    }

    async fn is_logged_in(&self) -> bool {
        self.snapshot().await.is_logged_in
    }

    /// `"Bearer <token>"`, or `None` when no token is stored.
    async fn auth_header(&self) -> Option<String> {
        self.snapshot().await.auth_header()
    }
}

/// Session store backed by a JSON file, or by memory alone.
///
/// Writers are serialised by a mutex; the watch channel holds the latest
/// committed value for readers. No coordination exists above that, so a
/// login racing a logout ends with whichever write lands last.
pub struct LocalSessionStore {
    path: Option<PathBuf>,
    state: watch::Sender<Session>,
    write_lock: Mutex<()>,
}

impl LocalSessionStore {
    /// Open the store at `path`, loading any previously saved session.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let initial = storage::load::<Session>(&path).await.unwrap_or_default();
        tracing::debug!(path = %path.display(), logged_in = initial.is_logged_in, "opened session store");
        Self::with_state(Some(path), initial)
    }

    /// A store that forgets everything when dropped.
    pub fn in_memory() -> Self {
        Self::with_state(None, Session::default())
    }

    fn with_state(path: Option<PathBuf>, initial: Session) -> Self {
        let (state, _) = watch::channel(initial);
        Self {
            path,
            state,
            write_lock: Mutex::new(()),
        }
    }

    async fn update(&self, change: impl FnOnce(&mut Session)) {
        let _guard = self.write_lock.lock().await;
        let mut next = self.state.borrow().clone();
        change(&mut next);

        if let Some(path) = &self.path {
            if let Err(e) = storage::save(path, &next).await {
                tracing::warn!(error = %e, "failed to persist session");
            }
        }
        self.state.send_replace(next);
    }
}

#[async_trait]
impl SessionStore for LocalSessionStore {
    async fn save_auth_token(&self, token: &str) {
        tracing::debug!("saving auth token");
        self.update(|s| s.auth_token = Some(token.to_string())).await;
    }

    async fn save_user_data(&self, user_id: &str, email: &str) {
        tracing::debug!(user_id, "saving user data");
        self.update(|s| {
            s.user_id = Some(user_id.to_string());
            s.user_email = Some(email.to_string());
            s.is_logged_in = true;
        })
        .await;
    }

    async fn save_login(&self, token: &str, user_id: &str, email: &str) {
        tracing::debug!(user_id, "saving login session");
        self.update(|s| {
            s.auth_token = Some(token.to_string());
            s.user_id = Some(user_id.to_string());
            s.user_email = Some(email.to_string());
            s.is_logged_in = true;
        })
        .await;
    }

    async fn clear_all(&self) {
        let _guard = self.write_lock.lock().await;
        if let Some(path) = &self.path {
            if let Err(e) = storage::clear(path, &Session::default()).await {
                tracing::warn!(error = %e, "failed to clear persisted session");
            }
        }
        self.state.send_replace(Session::default());
        tracing::debug!("session cleared");
    }

    async fn snapshot(&self) -> Session {
        let current = self.state.borrow().clone();
        current
    }

    fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fresh_store_is_logged_out() {
        let store = LocalSessionStore::in_memory();
        assert_eq!(store.snapshot().await, Session::default());
        assert!(!store.is_logged_in().await);
        assert_eq!(store.auth_header().await, None);
    }

    #[tokio::test]
    async fn auth_header_round_trip() {
        let store = LocalSessionStore::in_memory();
        store.save_auth_token("tok_123").await;
        assert_eq!(store.auth_header().await.as_deref(), Some("Bearer tok_123"));

        store.clear_all().await;
        assert_eq!(store.auth_header().await, None);
    }

    #[tokio::test]
    async fn save_user_data_sets_login_flag() {
        let store = LocalSessionStore::in_memory();
        store.save_user_data("u_1", "ada@example.com").await;
        assert!(store.is_logged_in().await);
        assert_eq!(store.user_id().await.as_deref(), Some("u_1"));
        assert_eq!(store.user_email().await.as_deref(), Some("ada@example.com"));
        assert_eq!(store.auth_token().await, None);
    }

    #[tokio::test]
    async fn session_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aivyra_preferences.json");

        {
            let store = LocalSessionStore::open(&path).await;
            store.save_login("tok", "u_1", "ada@example.com").await;
        }

        let reopened = LocalSessionStore::open(&path).await;
        assert_eq!(
            reopened.snapshot().await,
            Session {
                auth_token: Some("tok".into()),
                user_id: Some("u_1".into()),
                user_email: Some("ada@example.com".into()),
                is_logged_in: true,
            }
        );

        reopened.clear_all().await;
        assert!(!path.exists());
        let again = LocalSessionStore::open(&path).await;
        assert_eq!(again.snapshot().await, Session::default());
    }

    #[tokio::test]
    async fn subscribers_see_changes() {
        let store = LocalSessionStore::in_memory();
        let mut rx = store.subscribe();
        assert!(!rx.borrow().is_logged_in);

        store.save_login("tok", "u_1", "ada@example.com").await;
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_logged_in);

        store.clear_all().await;
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), Session::default());
    }
}
