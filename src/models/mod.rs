pub mod assessment;
pub mod course;
pub mod result;
pub mod user;
