//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::models::{AddTeacherRequest, CourseInstanceResponse, PersonResponse, TeacherType};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::course::list_courses,
        super::course::add_teacher,
    ),
    info(
        title = "Courses API",
        version = "0.1.0",
        description = "Teacher registration and semester course reporting",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Courses", description = "Course instances and their teachers"),
    ),
    components(
        schemas(
            TeacherType,
            AddTeacherRequest,
            PersonResponse,
            CourseInstanceResponse,
            ErrorBody,
        )
    ),
)]
pub struct ApiDoc;
