//! ConflictReason - Why an assignment was rejected

use serde::{Deserialize, Serialize};

/// Machine-readable reason carried by a conflict error
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConflictReason {
    TeacherAlreadyAssignedToCourse,
    CourseAlreadyHasMainTeacher,
}

impl ConflictReason {
    pub fn code(self) -> &'static str {
        match self {
            ConflictReason::TeacherAlreadyAssignedToCourse => "TEACHER_ALREADY_ASSIGNED_TO_COURSE",
            ConflictReason::CourseAlreadyHasMainTeacher => "COURSE_ALREADY_HAS_MAIN_TEACHER",
        }
    }
}

impl std::fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
