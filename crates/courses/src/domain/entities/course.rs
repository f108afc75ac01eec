//! Course catalog entities
//!
//! - CourseTemplate: semester-independent catalog definition
//! - CourseInstance: one offering of a template in one semester

use serde::{Deserialize, Serialize};

/// Catalog-level course definition, keyed by course code (e.g. "T-514-VEFT")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseTemplate {
    pub course_id: String,
    pub name: String,
}

impl CourseTemplate {
    pub fn new(course_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            name: name.into(),
        }
    }
}

/// A specific offering of a template in a specific semester
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseInstance {
    pub id: i32,
    pub course_id: String,
    pub semester: String,
}

impl CourseInstance {
    pub fn new(id: i32, course_id: impl Into<String>, semester: impl Into<String>) -> Self {
        Self {
            id,
            course_id: course_id.into(),
            semester: semester.into(),
        }
    }
}

/// One row of the semester report.
///
/// `main_teacher` is always a string: the teacher's name, or empty when the
/// instance has no main teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseInstanceSummary {
    pub course_instance_id: i32,
    pub template_id: String,
    pub name: String,
    pub main_teacher: String,
}
