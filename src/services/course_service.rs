use crate::dto::course_dto::{CreateCourseRequest, UpdateCourseRequest};
use crate::error::Result;
use crate::guard::ensure_access;
use crate::models::course::Course;
use crate::models::user::Role;
use crate::services::api_client::ApiClient;
use crate::services::session_service::SessionStore;
use crate::utils::validation::validate;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct CourseService {
    api: ApiClient,
    store: Arc<dyn SessionStore>,
}

impl CourseService {
    pub fn new(api: ApiClient, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }

    /// Any signed-in user may browse courses.
    pub async fn list(&self) -> Result<Vec<Course>> {
        ensure_access(self.store.current().as_ref(), &[])?;
        self.api.list_courses().await
    }

    pub async fn get(&self, course_id: &str) -> Result<Course> {
        ensure_access(self.store.current().as_ref(), &[])?;
        self.api.get_course(course_id).await
    }

    /// Instructors only.
    pub async fn create(&self, req: &CreateCourseRequest) -> Result<Course> {
        ensure_access(self.store.current().as_ref(), &[Role::Instructor])?;
        validate(req)?;
        let course = self.api.create_course(req).await?;
        info!("Course {} created", course.course_id);
        Ok(course)
    }

    pub async fn update(&self, course_id: &str, req: &UpdateCourseRequest) -> Result<()> {
        ensure_access(self.store.current().as_ref(), &[Role::Instructor])?;
        validate(req)?;
        self.api.update_course(course_id, req).await?;
        info!("Course {} updated", course_id);
        Ok(())
    }

    pub async fn delete(&self, course_id: &str) -> Result<()> {
        ensure_access(self.store.current().as_ref(), &[Role::Instructor])?;
        self.api.delete_course(course_id).await?;
        info!("Course {} deleted", course_id);
        Ok(())
    }
}
