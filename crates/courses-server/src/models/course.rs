//! Course instance report DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use courses::CourseInstanceSummary;

/// Semester filter for the course listing
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SemesterQuery {
    /// Semester identifier, e.g. "20153". Defaults to the configured semester.
    pub semester: Option<String>,
}

/// Course instance with its main teacher
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CourseInstanceResponse {
    pub course_instance_id: i32,
    pub template_id: String,
    pub name: String,
    /// Main teacher's name, empty when the course has none
    pub main_teacher: String,
}

impl From<CourseInstanceSummary> for CourseInstanceResponse {
    fn from(summary: CourseInstanceSummary) -> Self {
        Self {
            course_instance_id: summary.course_instance_id,
            template_id: summary.template_id,
            name: summary.name,
            main_teacher: summary.main_teacher,
        }
    }
}
