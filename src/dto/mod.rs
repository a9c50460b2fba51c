pub mod assessment_dto;
pub mod auth_dto;
pub mod course_dto;
pub mod result_dto;
pub mod user_dto;
