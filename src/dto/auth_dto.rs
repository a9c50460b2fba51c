use crate::models::user::{Role, User};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// The register endpoint expects PascalCase field names, unlike every other
/// resource.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(rename = "Name")]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(rename = "Email")]
    #[validate(email)]
    pub email: String,
    #[serde(rename = "Password")]
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
    #[serde(rename = "Role")]
    pub role: Role,
}
