//! Teacher assignment DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use courses::PersonSummary;

/// Teacher role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TeacherType {
    MainTeacher,
    AssistantTeacher,
}

impl From<TeacherType> for courses::TeacherType {
    fn from(t: TeacherType) -> Self {
        match t {
            TeacherType::MainTeacher => courses::TeacherType::MainTeacher,
            TeacherType::AssistantTeacher => courses::TeacherType::AssistantTeacher,
        }
    }
}

/// Add teacher to course request
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddTeacherRequest {
    pub ssn: String,
    #[serde(rename = "type")]
    pub teacher_type: TeacherType,
}

/// Basic person information
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PersonResponse {
    pub name: String,
    pub ssn: String,
}

impl From<PersonSummary> for PersonResponse {
    fn from(person: PersonSummary) -> Self {
        Self {
            name: person.name,
            ssn: person.ssn,
        }
    }
}
