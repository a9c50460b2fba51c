use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResultRequest {
    pub assessment_id: String,
    pub user_id: String,
    pub score: i32,
    pub attempt_date: DateTime<Utc>,
}
