//! Course Routes - Semester report and teacher assignment
//!
//! HTTP handlers that delegate to the application services.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};

use courses::DomainError;

use crate::error::{ApiError, ErrorBody};
use crate::models::{AddTeacherRequest, CourseInstanceResponse, PersonResponse, SemesterQuery};
use crate::AppState;

/// List course instances of a semester with their main teacher
#[utoipa::path(
    get,
    path = "/api/courses",
    params(SemesterQuery),
    responses(
        (status = 200, description = "Course instances of the semester", body = Vec<CourseInstanceResponse>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Courses"
)]
pub async fn list_courses(
    State(state): State<AppState>,
    Query(query): Query<SemesterQuery>,
) -> Result<Json<Vec<CourseInstanceResponse>>, ApiError> {
    let courses = state
        .report_service()
        .list_course_instances(query.semester.as_deref())
        .await?;

    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

/// Register a person as teacher of a course instance
#[utoipa::path(
    post,
    path = "/api/courses/{id}/teachers",
    params(("id" = i32, Path, description = "Course instance ID")),
    request_body = AddTeacherRequest,
    responses(
        (status = 201, description = "Teacher added", body = PersonResponse),
        (status = 400, description = "Teacher already assigned or main teacher already set", body = ErrorBody),
        (status = 404, description = "Course instance or person not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Courses"
)]
pub async fn add_teacher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AddTeacherRequest>,
) -> Result<(axum::http::StatusCode, Json<PersonResponse>), ApiError> {
    if payload.ssn.trim().is_empty() {
        return Err(DomainError::Validation("ssn must not be empty".to_string()).into());
    }

    let person = state
        .assignment_service()
        .assign_teacher(id, &payload.ssn, payload.teacher_type.into())
        .await?;

    Ok((axum::http::StatusCode::CREATED, Json(person.into())))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/courses", get(list_courses))
        .route("/api/courses/:id/teachers", post(add_teacher))
}
