use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The persisted outcome of one student's single attempt at one assessment.
/// Immutable once created; every submission creates a new record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub result_id: String,
    pub assessment_id: String,
    pub user_id: String,
    pub score: i32,
    pub attempt_date: DateTime<Utc>,
}
