//! Application Layer (Use Cases)
//!
//! Orchestrates domain rules over a unit of work.

mod semester_report_service;
mod teacher_assignment_service;

pub use semester_report_service::{CourseInstanceReportRow, SemesterReportService};
pub use teacher_assignment_service::TeacherAssignmentService;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;
    use crate::config::ReportConfig;
    use crate::domain::{CourseInstanceSummary, TeacherType};
    use crate::ports::UnitOfWorkFactory;

    #[tokio::test]
    async fn test_assigned_main_teacher_appears_in_report() {
        let store = InMemoryStore::demo();

        let person = TeacherAssignmentService::new(store.begin())
            .assign_teacher(1, "1234567890", TeacherType::MainTeacher)
            .await
            .unwrap();
        assert_eq!(person.name, "Jane Doe");
        assert_eq!(person.ssn, "1234567890");

        let courses = SemesterReportService::new(store.begin(), ReportConfig::default())
            .list_course_instances(Some("20153"))
            .await
            .unwrap();

        assert!(courses.contains(&CourseInstanceSummary {
            course_instance_id: 1,
            template_id: "T-514-VEFT".to_string(),
            name: "Vefþjónustur".to_string(),
            main_teacher: "Jane Doe".to_string(),
        }));
    }
}
