pub mod config;
pub mod dto;
pub mod error;
pub mod guard;
pub mod models;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::error::Result;
use crate::services::{
    api_client::ApiClient, assessment_service::AssessmentService, attempt_service::AttemptService,
    auth_service::AuthService, course_service::CourseService,
    session_service::FileSessionStore, session_service::SessionStore,
    user_service::UserService,
};
use std::sync::Arc;

/// Everything a frontend needs, wired together once at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SessionStore>,
    pub api_client: ApiClient,
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub course_service: CourseService,
    pub assessment_service: AssessmentService,
    pub attempt_service: AttemptService,
}

impl AppState {
    /// Builds the state with the default file-backed session store.
    pub fn new(config: &Config) -> Result<Self> {
        let store: Arc<dyn SessionStore> =
            Arc::new(FileSessionStore::new(config.session_file.clone()));
        Self::with_store(config, store)
    }

    pub fn with_store(config: &Config, store: Arc<dyn SessionStore>) -> Result<Self> {
        let api_client = ApiClient::new(config, store.clone())?;

        let auth_service = AuthService::new(api_client.clone(), store.clone());
        let user_service = UserService::new(api_client.clone(), store.clone());
        let course_service = CourseService::new(api_client.clone(), store.clone());
        let assessment_service = AssessmentService::new(api_client.clone(), store.clone());
        let attempt_service = AttemptService::new(api_client.clone(), store.clone());

        Ok(Self {
            store,
            api_client,
            auth_service,
            user_service,
            course_service,
            assessment_service,
            attempt_service,
        })
    }
}

/// Installs the tracing subscriber. Safe to call more than once; later calls
/// are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();
}
