pub mod api_client;
pub mod assessment_service;
pub mod attempt_service;
pub mod auth_service;
pub mod course_service;
pub mod grading_service;
pub mod session_service;
pub mod user_service;
