use crate::dto::user_dto::UpdateUserRequest;
use crate::error::{Error, Result};
use crate::models::user::UserProfile;
use crate::services::api_client::ApiClient;
use crate::services::session_service::SessionStore;
use crate::utils::validation::validate;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct UserService {
    api: ApiClient,
    store: Arc<dyn SessionStore>,
}

impl UserService {
    pub fn new(api: ApiClient, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }

    /// Fetches the signed-in user's profile.
    pub async fn profile(&self) -> Result<UserProfile> {
        let session = self
            .store
            .current()
            .ok_or_else(|| Error::Unauthorized("Not signed in".to_string()))?;
        self.api.get_user(&session.user_id).await
    }

    pub async fn update_profile(&self, full_name: &str, email: &str) -> Result<()> {
        let session = self
            .store
            .current()
            .ok_or_else(|| Error::Unauthorized("Not signed in".to_string()))?;

        let req = UpdateUserRequest {
            user_id: session.user_id.clone(),
            full_name: full_name.to_string(),
            email: email.to_string(),
        };
        validate(&req)?;

        self.api.update_user(&req).await?;
        info!("Profile updated for {}", session.user_id);
        Ok(())
    }
}
