//! User preferences. Every helper funnels into one partial update.

use std::sync::Arc;

use aivyra_shared::{UpdateUserSettingsRequest, UserSettings};

use super::{Context, Operation};
use crate::api::AivyraApi;
use crate::resource::Resource;
use crate::session::SessionStore;

const GET: Operation = Operation::new("settings.get", "Failed to load settings");
const UPDATE: Operation = Operation::new("settings.update", "Failed to update settings");
const RESET: Operation = Operation::new("settings.reset", "Failed to reset settings");

#[derive(Clone)]
pub struct UserSettingsRepository {
    ctx: Context,
}

impl UserSettingsRepository {
    pub fn new(api: Arc<dyn AivyraApi>, session: Arc<dyn SessionStore>) -> Self {
        Self {
            ctx: Context::new(api, session),
        }
    }

    pub async fn user_settings(&self) -> Resource<UserSettings> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        GET.data(self.ctx.api.user_settings(&auth).await)
    }

    pub async fn update_user_settings(&self, request: UpdateUserSettingsRequest) -> Resource<UserSettings> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        UPDATE.data(self.ctx.api.update_user_settings(&auth, &request).await)
    }

    /// Restore every preference to the server default.
    pub async fn reset_user_settings(&self) -> Resource<UserSettings> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        RESET.data(self.ctx.api.reset_user_settings(&auth).await)
    }

    pub async fn update_theme(&self, theme: &str) -> Resource<UserSettings> {
        self.update_user_settings(UpdateUserSettingsRequest {
            theme: Some(theme.to_string()),
            ..Default::default()
        })
        .await
    }

    pub async fn update_font_size(&self, font_size: u32) -> Resource<UserSettings> {
        self.update_user_settings(UpdateUserSettingsRequest {
            font_size: Some(font_size),
            ..Default::default()
        })
        .await
    }

    pub async fn update_notification_settings(
        &self,
        email_notifications: Option<bool>,
        push_notifications: Option<bool>,
        sound_enabled: Option<bool>,
        desktop_notifications: Option<bool>,
    ) -> Resource<UserSettings> {
        self.update_user_settings(UpdateUserSettingsRequest {
            email_notifications,
            push_notifications,
            sound_enabled,
            desktop_notifications,
            ..Default::default()
        })
        .await
    }

    pub async fn update_ai_settings(
        &self,
        ai_model: Option<&str>,
        temperature: Option<f32>,
        max_tokens: Option<u32>,
    ) -> Resource<UserSettings> {
        self.update_user_settings(UpdateUserSettingsRequest {
            ai_model: ai_model.map(str::to_string),
            temperature,
            max_tokens,
            ..Default::default()
        })
        .await
    }

    pub async fn update_privacy_settings(
        &self,
        show_online_status: Option<bool>,
        allow_analytics: Option<bool>,
        share_usage_data: Option<bool>,
    ) -> Resource<UserSettings> {
        self.update_user_settings(UpdateUserSettingsRequest {
            show_online_status,
            allow_analytics,
            share_usage_data,
            ..Default::default()
        })
        .await
    }
}
