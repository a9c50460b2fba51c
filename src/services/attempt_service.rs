use crate::dto::result_dto::CreateResultRequest;
use crate::error::{Error, Result};
use crate::guard::ensure_access;
use crate::models::assessment::{Assessment, Question};
use crate::models::result::AssessmentResult;
use crate::models::user::Role;
use crate::services::api_client::ApiClient;
use crate::services::grading_service::{GradeOutcome, GradingService};
use crate::services::session_service::SessionStore;
use crate::utils::validation::parse_questions;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info};

/// Sink for a graded attempt's result. `ApiClient` is the production
/// implementation; tests substitute their own to observe submission counts.
#[allow(async_fn_in_trait)]
pub trait RecordResults {
    async fn record(&self, req: &CreateResultRequest) -> Result<()>;
}

impl RecordResults for ApiClient {
    async fn record(&self, req: &CreateResultRequest) -> Result<()> {
        self.create_result(req).await
    }
}

/// One in-progress run through an assessment. Answers can be changed freely
/// until `submit`, after which the attempt is locked: the submitted flag flips
/// before any network traffic, so a second call can never post twice.
#[derive(Debug, Clone)]
pub struct AssessmentAttempt {
    pub assessment: Assessment,
    pub questions: Vec<Question>,
    answers: HashMap<usize, String>,
    submitted: bool,
    outcome: Option<GradeOutcome>,
}

impl AssessmentAttempt {
    pub fn new(assessment: Assessment, questions: Vec<Question>) -> Self {
        Self {
            assessment,
            questions,
            answers: HashMap::new(),
            submitted: false,
            outcome: None,
        }
    }

    /// Records an answer for a question. Re-answering overwrites; last write
    /// wins.
    pub fn select_answer(&mut self, question_index: usize, answer: impl Into<String>) -> Result<()> {
        if self.submitted {
            return Err(Error::BadRequest(
                "Attempt has already been submitted".to_string(),
            ));
        }
        if question_index >= self.questions.len() {
            return Err(Error::Validation(format!(
                "No question at index {}",
                question_index
            )));
        }
        self.answers.insert(question_index, answer.into());
        Ok(())
    }

    pub fn answer(&self, question_index: usize) -> Option<&str> {
        self.answers.get(&question_index).map(String::as_str)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn outcome(&self) -> Option<GradeOutcome> {
        self.outcome
    }

    /// Grades the attempt and posts the result exactly once. The attempt is
    /// marked submitted before the post, so even a failed post leaves it
    /// locked; a retry must be an explicit new attempt.
    pub async fn submit<R: RecordResults>(
        &mut self,
        recorder: &R,
        user_id: &str,
    ) -> Result<GradeOutcome> {
        if self.submitted {
            return Err(Error::BadRequest(
                "Attempt has already been submitted".to_string(),
            ));
        }
        self.submitted = true;

        let outcome = GradingService::new().grade(
            &self.questions,
            &self.answers,
            self.assessment.max_score,
        );
        self.outcome = Some(outcome);

        let req = CreateResultRequest {
            assessment_id: self.assessment.assessment_id.clone(),
            user_id: user_id.to_string(),
            score: outcome.score,
            attempt_date: Utc::now(),
        };

        if let Err(e) = recorder.record(&req).await {
            error!(
                "Failed to post result for assessment {}: {}",
                self.assessment.assessment_id, e
            );
            return Err(e);
        }

        info!(
            "Attempt submitted for assessment {}: score {}",
            self.assessment.assessment_id, outcome.score
        );
        Ok(outcome)
    }
}

#[derive(Clone)]
pub struct AttemptService {
    api: ApiClient,
    store: Arc<dyn SessionStore>,
}

impl AttemptService {
    pub fn new(api: ApiClient, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }

    /// Fetches an assessment and decodes its questions into a fresh attempt.
    pub async fn start(&self, assessment_id: &str) -> Result<AssessmentAttempt> {
        ensure_access(self.store.current().as_ref(), &[])?;
        let assessment = self.api.get_assessment(assessment_id).await?;
        let questions = parse_questions(&assessment.questions)?;
        Ok(AssessmentAttempt::new(assessment, questions))
    }

    /// Submits an attempt on behalf of the signed-in user.
    pub async fn submit(&self, attempt: &mut AssessmentAttempt) -> Result<GradeOutcome> {
        let session = ensure_access(self.store.current().as_ref(), &[])?.clone();
        attempt.submit(&self.api, &session.user_id).await
    }

    /// The signed-in user's own results.
    pub async fn my_results(&self) -> Result<Vec<AssessmentResult>> {
        let session = ensure_access(self.store.current().as_ref(), &[])?.clone();
        let results = self.api.list_results().await?;
        Ok(results
            .into_iter()
            .filter(|r| r.user_id == session.user_id)
            .collect())
    }

    /// Every result across users. Instructors only.
    pub async fn all_results(&self) -> Result<Vec<AssessmentResult>> {
        ensure_access(self.store.current().as_ref(), &[Role::Instructor])?;
        self.api.list_results().await
    }
}
