use crate::config::Config;
use crate::dto::assessment_dto::CreateAssessmentRequest;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::dto::course_dto::{CreateCourseRequest, UpdateCourseRequest};
use crate::dto::result_dto::CreateResultRequest;
use crate::dto::user_dto::UpdateUserRequest;
use crate::error::{Error, Result};
use crate::models::assessment::Assessment;
use crate::models::course::Course;
use crate::models::result::AssessmentResult;
use crate::models::user::UserProfile;
use crate::services::session_service::SessionStore;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{error, info};

/// Thin typed client over the backend REST API. Attaches the stored session's
/// bearer token to every request and maps non-2xx responses onto the crate
/// error taxonomy.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(config: &Config, store: Arc<dyn SessionStore>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            store,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attaches the current session's token, if one exists. Unauthenticated
    /// calls (login, register) go out bare.
    pub fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.store.current() {
            Some(session) => builder.bearer_auth(session.token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.authorize(builder).send().await?;
        let response = check_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn send_no_content(&self, builder: RequestBuilder) -> Result<()> {
        let response = self.authorize(builder).send().await?;
        check_status(response).await?;
        Ok(())
    }

    // --- auth ---

    pub async fn login(&self, req: &LoginRequest) -> Result<LoginResponse> {
        let builder = self.client.post(self.url("api/Auth/login")).json(req);
        self.send(builder).await
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<()> {
        let builder = self.client.post(self.url("api/Auth/register")).json(req);
        self.send_no_content(builder).await
    }

    // --- courses ---

    pub async fn list_courses(&self) -> Result<Vec<Course>> {
        self.send(self.client.get(self.url("api/Courses"))).await
    }

    pub async fn get_course(&self, course_id: &str) -> Result<Course> {
        self.send(self.client.get(self.url(&format!("api/Courses/{}", course_id))))
            .await
    }

    pub async fn create_course(&self, req: &CreateCourseRequest) -> Result<Course> {
        let builder = self.client.post(self.url("api/Courses")).json(req);
        self.send(builder).await
    }

    pub async fn update_course(&self, course_id: &str, req: &UpdateCourseRequest) -> Result<()> {
        let builder = self
            .client
            .put(self.url(&format!("api/Courses/{}", course_id)))
            .json(req);
        self.send_no_content(builder).await
    }

    pub async fn delete_course(&self, course_id: &str) -> Result<()> {
        self.send_no_content(self.client.delete(self.url(&format!("api/Courses/{}", course_id))))
            .await
    }

    // --- assessments ---

    pub async fn list_assessments(&self) -> Result<Vec<Assessment>> {
        self.send(self.client.get(self.url("api/Assessments"))).await
    }

    pub async fn get_assessment(&self, assessment_id: &str) -> Result<Assessment> {
        self.send(
            self.client
                .get(self.url(&format!("api/Assessments/{}", assessment_id))),
        )
        .await
    }

    pub async fn create_assessment(&self, req: &CreateAssessmentRequest) -> Result<Assessment> {
        let builder = self.client.post(self.url("api/Assessments")).json(req);
        self.send(builder).await
    }

    pub async fn delete_assessment(&self, assessment_id: &str) -> Result<()> {
        self.send_no_content(
            self.client
                .delete(self.url(&format!("api/Assessments/{}", assessment_id))),
        )
        .await
    }

    // --- users ---

    pub async fn get_user(&self, user_id: &str) -> Result<UserProfile> {
        self.send(self.client.get(self.url(&format!("api/Users/{}", user_id))))
            .await
    }

    pub async fn update_user(&self, req: &UpdateUserRequest) -> Result<()> {
        let builder = self
            .client
            .put(self.url(&format!("api/Users/{}", req.user_id)))
            .json(req);
        self.send_no_content(builder).await
    }

    // --- results ---

    pub async fn list_results(&self) -> Result<Vec<AssessmentResult>> {
        self.send(self.client.get(self.url("api/Results"))).await
    }

    pub async fn create_result(&self, req: &CreateResultRequest) -> Result<()> {
        info!(
            "Posting result for assessment {} (score {})",
            req.assessment_id, req.score
        );
        let builder = self.client.post(self.url("api/Results")).json(req);
        self.send_no_content(builder).await
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = extract_message(status, &body);
    error!("API request failed ({}): {}", status.as_u16(), message);
    Err(Error::from_status(status.as_u16(), message))
}

/// Pulls a human-readable message out of an error body. The backend usually
/// sends `{"message": "..."}` but some proxies answer with `{"error": "..."}`
/// or plain text.
fn extract_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() && !trimmed.starts_with('{') && !trimmed.starts_with('<') {
        return trimmed.to_string();
    }

    match status {
        StatusCode::UNAUTHORIZED => "Session expired, please log in again".to_string(),
        StatusCode::FORBIDDEN => "You do not have access to this resource".to_string(),
        StatusCode::NOT_FOUND => "Resource not found".to_string(),
        _ => format!("Request failed with status {}", status.as_u16()),
    }
}
