use serde::{Deserialize, Serialize};
use validator::Validate;

/// Update payload for the Users resource. The backend insists on the id being
/// repeated in the body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub user_id: String,
    #[validate(length(min = 1, message = "fullName must not be empty"))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
}
