use crate::dto::auth_dto::{LoginRequest, RegisterRequest};
use crate::error::{Error, Result};
use crate::models::user::Session;
use crate::services::api_client::ApiClient;
use crate::services::session_service::SessionStore;
use crate::utils::validation::validate;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    store: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(api: ApiClient, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }

    /// Signs in and persists the resulting session. A 401/403 from the backend
    /// is reported as bad credentials rather than an expired session.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        validate(&req)?;

        let response = match self.api.login(&req).await {
            Ok(response) => response,
            Err(e) if e.is_unauthorized() => {
                warn!("Login rejected for {}", email);
                return Err(Error::Auth("Invalid email or password".to_string()));
            }
            Err(e) => return Err(e),
        };

        let session = Session::from_login(response.token, response.user);
        self.store.establish(session.clone())?;
        info!("User {} signed in", session.user_id);
        Ok(session)
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<()> {
        validate(req)?;
        self.api.register(req).await?;
        info!("Registered new account for {}", req.email);
        Ok(())
    }

    /// Clears the persisted session. Safe to call when already signed out.
    pub fn logout(&self) -> Result<()> {
        self.store.clear()
    }

    /// Reloads a previously persisted session, typically at startup.
    pub fn restore(&self) -> Result<Option<Session>> {
        self.store.restore()
    }

    pub fn current_session(&self) -> Option<Session> {
        self.store.current()
    }

    /// Called when any API call comes back 401/403: the token is no longer
    /// usable, so the session is dropped and the caller must sign in again.
    pub fn handle_unauthorized(&self) -> Result<()> {
        warn!("Session rejected by the backend, clearing it");
        self.store.clear()
    }
}
