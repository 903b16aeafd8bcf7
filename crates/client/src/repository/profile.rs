//! Profile reads, edits and password changes for the signed-in user.

use std::sync::Arc;

use aivyra_shared::{ChangePasswordRequest, User};

use super::{Context, Operation};
use crate::api::AivyraApi;
use crate::resource::Resource;
use crate::session::SessionStore;

const GET: Operation = Operation::new("profile.get", "Failed to load profile");
const UPDATE: Operation = Operation::new("profile.update", "Failed to update profile");
const CHANGE_PASSWORD: Operation = Operation::new("profile.change_password", "Failed to change password");

#[derive(Clone)]
pub struct ProfileRepository {
    ctx: Context,
}

impl ProfileRepository {
    pub fn new(api: Arc<dyn AivyraApi>, session: Arc<dyn SessionStore>) -> Self {
        Self {
            ctx: Context::new(api, session),
        }
    }

    pub async fn profile(&self) -> Resource<User> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        GET.data(self.ctx.api.user_profile(&auth).await)
    }

    /// Send the edited profile. The stored email follows the server's answer.
    pub async fn update_profile(&self, user: &User) -> Resource<User> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        let result = UPDATE.data(self.ctx.api.update_profile(&auth, user).await);
        if let Resource::Success(updated) = &result {
            self.ctx
                .session
                .save_user_data(&updated.id, &updated.email)
                .await;
        }
        result
    }

    pub async fn change_password(&self, current_password: &str, new_password: &str) -> Resource<String> {
        let Some(auth) = self.ctx.auth_header().await else {
            return Resource::not_authenticated();
        };
        let request = ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        CHANGE_PASSWORD.server_message(
            self.ctx.api.change_password(&auth, &request).await,
            "Password changed successfully",
        )
    }
}
