use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create payload for an assessment. `questions` stays an encoded JSON string
/// on the wire; `AssessmentService::create` validates its shape before this
/// ever leaves the client.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssessmentRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub questions: String,
    #[validate(range(min = 1, message = "maxScore must be positive"))]
    pub max_score: i32,
    #[validate(length(min = 1, message = "courseId must not be empty"))]
    pub course_id: String,
}
