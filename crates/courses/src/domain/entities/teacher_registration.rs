//! TeacherRegistration - Binding of a person to a course instance

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::TeacherType;

/// Registration of a person as a teacher of a course instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherRegistration {
    pub id: Uuid,
    pub course_instance_id: i32,
    pub ssn: String,
    pub teacher_type: TeacherType,
    pub created_at: DateTime<Utc>,
}

impl TeacherRegistration {
    /// Create a new registration with generated ID and timestamp
    pub fn new(course_instance_id: i32, ssn: impl Into<String>, teacher_type: TeacherType) -> Self {
        Self {
            id: Uuid::new_v4(),
            course_instance_id,
            ssn: ssn.into(),
            teacher_type,
            created_at: Utc::now(),
        }
    }

    pub fn is_main_teacher(&self) -> bool {
        self.teacher_type == TeacherType::MainTeacher
    }

    /// Whether this registration binds `ssn` to `course_instance_id`
    pub fn binds(&self, course_instance_id: i32, ssn: &str) -> bool {
        self.course_instance_id == course_instance_id && self.ssn == ssn
    }
}
