//! Aivyra Client - session-aware access to the Aivyra backend
//!
//! Repositories wrap the HTTP API, attach the stored bearer token, and fold
//! every outcome into a [`Resource`]. Login state lives in a persistent
//! [`SessionStore`] injected into each repository.

pub mod api;
pub mod app;
pub mod config;
pub mod logging;
pub mod repository;
pub mod resource;
pub mod session;
pub mod storage;

pub use aivyra_shared as shared;
pub use api::{AivyraApi, HttpApiClient};
pub use app::AivyraClient;
pub use config::ClientConfig;
pub use repository::{
    AuthRepository, ChatRepository, ConversationRepository, ProfileRepository,
    UserSettingsRepository, VerificationRepository,
};
pub use resource::Resource;
pub use session::{LocalSessionStore, Session, SessionStore};
