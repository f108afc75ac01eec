//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Person: Someone who can teach
//! - CourseTemplate / CourseInstance: Catalog course and its semester offering
//! - TeacherRegistration: Person bound to a course instance with a role

mod course;
mod person;
mod teacher_registration;

pub use course::*;
pub use person::*;
pub use teacher_registration::*;

/// Marker for types stored behind a [`Repository`](crate::ports::Repository)
pub trait Entity: Clone + Send + Sync + 'static {
    /// Name used in error messages and logs
    const NAME: &'static str;
}

impl Entity for Person {
    const NAME: &'static str = "Person";
}

impl Entity for CourseTemplate {
    const NAME: &'static str = "CourseTemplate";
}

impl Entity for CourseInstance {
    const NAME: &'static str = "CourseInstance";
}

impl Entity for TeacherRegistration {
    const NAME: &'static str = "TeacherRegistration";
}
