//! Composition root: one API client and one session store per process,
//! shared by every repository.

use std::sync::Arc;

use aivyra_shared::ApiError;

use crate::api::{AivyraApi, HttpApiClient};
use crate::config::ClientConfig;
use crate::repository::{
    AuthRepository, ChatRepository, ConversationRepository, ProfileRepository,
    UserSettingsRepository, VerificationRepository,
};
use crate::session::{LocalSessionStore, SessionStore};

#[derive(Clone)]
pub struct AivyraClient {
    pub auth: AuthRepository,
    pub chat: ChatRepository,
    pub conversations: ConversationRepository,
    pub settings: UserSettingsRepository,
    pub profile: ProfileRepository,
    pub verification: VerificationRepository,
    session: Arc<dyn SessionStore>,
}

impl AivyraClient {
    /// Build the HTTP client and open the persisted session from `config`.
    pub async fn connect(config: &ClientConfig) -> Result<Self, ApiError> {
        let api = Arc::new(HttpApiClient::new(config)?);
        let session = Arc::new(LocalSessionStore::open(&config.store_path).await);
        tracing::debug!(base_url = %config.base_url, "client ready");
        Ok(Self::from_parts(api, session))
    }

    pub fn from_parts(api: Arc<dyn AivyraApi>, session: Arc<dyn SessionStore>) -> Self {
        Self {
            auth: AuthRepository::new(api.clone(), session.clone()),
            chat: ChatRepository::new(api.clone(), session.clone()),
            conversations: ConversationRepository::new(api.clone(), session.clone()),
            settings: UserSettingsRepository::new(api.clone(), session.clone()),
            profile: ProfileRepository::new(api.clone(), session.clone()),
            verification: VerificationRepository::new(api),
            session,
        }
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }
}
