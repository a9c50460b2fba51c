use crate::dto::assessment_dto::CreateAssessmentRequest;
use crate::error::Result;
use crate::guard::ensure_access;
use crate::models::assessment::{Assessment, Question};
use crate::models::user::Role;
use crate::services::api_client::ApiClient;
use crate::services::session_service::SessionStore;
use crate::utils::validation::{validate, validate_questions};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AssessmentService {
    api: ApiClient,
    store: Arc<dyn SessionStore>,
}

impl AssessmentService {
    pub fn new(api: ApiClient, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }

    pub async fn list(&self) -> Result<Vec<Assessment>> {
        ensure_access(self.store.current().as_ref(), &[])?;
        self.api.list_assessments().await
    }

    /// The backend serves assessments as one collection; course pages filter.
    pub async fn list_for_course(&self, course_id: &str) -> Result<Vec<Assessment>> {
        let all = self.list().await?;
        Ok(all.into_iter().filter(|a| a.course_id == course_id).collect())
    }

    pub async fn get(&self, assessment_id: &str) -> Result<Assessment> {
        ensure_access(self.store.current().as_ref(), &[])?;
        self.api.get_assessment(assessment_id).await
    }

    /// Creates an assessment. The questions payload is fully validated before
    /// anything goes over the wire, so a malformed quiz never reaches the
    /// backend.
    pub async fn create(&self, req: &CreateAssessmentRequest) -> Result<Assessment> {
        ensure_access(self.store.current().as_ref(), &[Role::Instructor])?;
        validate(req)?;
        let questions = validate_questions(&req.questions)?;

        let assessment = self.api.create_assessment(req).await?;
        info!(
            "Assessment {} created with {} questions",
            assessment.assessment_id,
            questions.len()
        );
        Ok(assessment)
    }

    pub async fn delete(&self, assessment_id: &str) -> Result<()> {
        ensure_access(self.store.current().as_ref(), &[Role::Instructor])?;
        self.api.delete_assessment(assessment_id).await?;
        info!("Assessment {} deleted", assessment_id);
        Ok(())
    }
}

/// Decodes an assessment's question payload for taking or review.
pub fn decode_questions(assessment: &Assessment) -> Result<Vec<Question>> {
    crate::utils::validation::parse_questions(&assessment.questions)
}
