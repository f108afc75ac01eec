//! Semester Report Service (Use Case)
//!
//! Lists the course instances of a semester with their main teacher.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::ReportConfig;
use crate::domain::{
    CourseInstance, CourseInstanceSummary, CourseTemplate, DomainError, Person,
    TeacherRegistration,
};
use crate::ports::{UnitOfWork, UnitOfWorkExt};

/// Joined report row before projection.
///
/// `main_teacher` is `None` when the instance has no resolvable main teacher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseInstanceReportRow {
    pub course_instance_id: i32,
    pub template_id: String,
    pub name: String,
    pub main_teacher: Option<String>,
}

impl From<CourseInstanceReportRow> for CourseInstanceSummary {
    fn from(row: CourseInstanceReportRow) -> Self {
        Self {
            course_instance_id: row.course_instance_id,
            template_id: row.template_id,
            name: row.name,
            main_teacher: row.main_teacher.unwrap_or_default(),
        }
    }
}

/// Application service for semester reporting
pub struct SemesterReportService<U: UnitOfWork + ?Sized> {
    uow: Arc<U>,
    config: ReportConfig,
}

impl<U: UnitOfWork + ?Sized> SemesterReportService<U> {
    pub fn new(uow: Arc<U>, config: ReportConfig) -> Self {
        Self { uow, config }
    }

    /// List course instances of `semester` (or the configured default when
    /// absent or empty), sorted by course instance id.
    pub async fn list_course_instances(
        &self,
        semester: Option<&str>,
    ) -> Result<Vec<CourseInstanceSummary>, DomainError> {
        let rows = self.report_rows(semester).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Joined rows with the main teacher lookup left unresolved
    pub async fn report_rows(
        &self,
        semester: Option<&str>,
    ) -> Result<Vec<CourseInstanceReportRow>, DomainError> {
        let semester = self.config.resolve_semester(semester);

        let templates: HashMap<String, CourseTemplate> = self
            .uow
            .get_repository::<CourseTemplate>()
            .all()
            .await?
            .into_iter()
            .map(|t| (t.course_id.clone(), t))
            .collect();

        let persons: HashMap<String, Person> = self
            .uow
            .get_repository::<Person>()
            .all()
            .await?
            .into_iter()
            .map(|p| (p.ssn.clone(), p))
            .collect();

        // Registrations whose person is missing are dropped; the first main
        // teacher found for an instance wins.
        let mut main_teachers: HashMap<i32, String> = HashMap::new();
        for registration in self
            .uow
            .get_repository::<TeacherRegistration>()
            .all()
            .await?
            .into_iter()
            .filter(TeacherRegistration::is_main_teacher)
        {
            if let Some(person) = persons.get(&registration.ssn) {
                main_teachers
                    .entry(registration.course_instance_id)
                    .or_insert_with(|| person.name.clone());
            }
        }

        let mut rows: Vec<CourseInstanceReportRow> = self
            .uow
            .get_repository::<CourseInstance>()
            .all()
            .await?
            .into_iter()
            .filter(|c| c.semester == semester)
            .filter_map(|c| {
                let template = templates.get(&c.course_id)?;
                Some(CourseInstanceReportRow {
                    course_instance_id: c.id,
                    template_id: template.course_id.clone(),
                    name: template.name.clone(),
                    main_teacher: main_teachers.get(&c.id).cloned(),
                })
            })
            .collect();

        rows.sort_by_key(|row| row.course_instance_id);

        tracing::debug!("Semester {} report: {} course instances", semester, rows.len());

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::adapters::{InMemoryStore, InMemoryUnitOfWork};
    use crate::domain::TeacherType;
    use crate::ports::{HasRepository, Repository};

    fn store() -> InMemoryStore {
        InMemoryStore::new()
            .with_template(CourseTemplate::new("T-514-VEFT", "Vefþjónustur"))
            .with_template(CourseTemplate::new("T-111-PROG", "Forritun"))
            .with_instance(CourseInstance::new(1, "T-514-VEFT", "20153"))
            .with_instance(CourseInstance::new(2, "T-111-PROG", "20153"))
            .with_instance(CourseInstance::new(3, "T-111-PROG", "20161"))
            .with_person(Person::new("1234567890", "Jane Doe"))
            .with_person(Person::new("1234567891", "John Doe"))
    }

    fn service(store: &InMemoryStore) -> SemesterReportService<InMemoryUnitOfWork> {
        SemesterReportService::new(Arc::new(store.unit_of_work()), ReportConfig::default())
    }

    #[tokio::test]
    async fn test_instance_without_main_teacher_has_empty_name() {
        let store = store();

        let courses = service(&store).list_course_instances(Some("20153")).await.unwrap();

        assert_eq!(courses.len(), 2);
        assert!(courses.iter().all(|c| c.main_teacher.is_empty()));
    }

    #[tokio::test]
    async fn test_report_rows_keep_missing_teacher_as_none() {
        let store = store().with_registration(1, "1234567890", TeacherType::MainTeacher);

        let rows = service(&store).report_rows(Some("20153")).await.unwrap();

        assert_eq!(rows[0].main_teacher.as_deref(), Some("Jane Doe"));
        assert_eq!(rows[1].main_teacher, None);
    }

    #[tokio::test]
    async fn test_main_teacher_resolved_and_assistant_ignored() {
        let store = store()
            .with_registration(1, "1234567891", TeacherType::AssistantTeacher)
            .with_registration(1, "1234567890", TeacherType::MainTeacher)
            .with_registration(2, "1234567891", TeacherType::AssistantTeacher);

        let courses = service(&store).list_course_instances(Some("20153")).await.unwrap();

        assert_eq!(
            courses,
            vec![
                CourseInstanceSummary {
                    course_instance_id: 1,
                    template_id: "T-514-VEFT".to_string(),
                    name: "Vefþjónustur".to_string(),
                    main_teacher: "Jane Doe".to_string(),
                },
                CourseInstanceSummary {
                    course_instance_id: 2,
                    template_id: "T-111-PROG".to_string(),
                    name: "Forritun".to_string(),
                    main_teacher: String::new(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_semester_uses_default() {
        let store = store().with_registration(2, "1234567891", TeacherType::MainTeacher);
        let service = service(&store);

        let implicit = service.list_course_instances(None).await.unwrap();
        let empty = service.list_course_instances(Some("")).await.unwrap();
        let explicit = service.list_course_instances(Some("20153")).await.unwrap();

        assert_eq!(implicit, explicit);
        assert_eq!(empty, explicit);
    }

    #[tokio::test]
    async fn test_configured_default_semester() {
        let store = store();
        let service =
            SemesterReportService::new(Arc::new(store.unit_of_work()), ReportConfig::new("20161"));

        let courses = service.list_course_instances(None).await.unwrap();

        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].course_instance_id, 3);
    }

    #[tokio::test]
    async fn test_filters_same_template_by_semester() {
        let store = store();

        let courses = service(&store).list_course_instances(Some("20161")).await.unwrap();

        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].course_instance_id, 3);
        assert_eq!(courses[0].template_id, "T-111-PROG");
    }

    #[tokio::test]
    async fn test_instance_without_template_is_dropped() {
        let store = store().with_instance(CourseInstance::new(4, "T-999-GONE", "20153"));

        let courses = service(&store).list_course_instances(Some("20153")).await.unwrap();

        assert!(courses.iter().all(|c| c.course_instance_id != 4));
        assert_eq!(courses.len(), 2);
    }

    #[tokio::test]
    async fn test_dangling_main_teacher_registration_is_ignored() {
        let store = store().with_registration(1, "0000000000", TeacherType::MainTeacher);

        let courses = service(&store).list_course_instances(Some("20153")).await.unwrap();

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].course_instance_id, 1);
        assert_eq!(courses[0].main_teacher, "");
    }

    #[tokio::test]
    async fn test_each_instance_listed_once_with_two_main_teachers() {
        let store = store()
            .with_registration(1, "1234567890", TeacherType::MainTeacher)
            .with_registration(1, "1234567891", TeacherType::MainTeacher);

        let courses = service(&store).list_course_instances(Some("20153")).await.unwrap();

        assert_eq!(courses.iter().filter(|c| c.course_instance_id == 1).count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_semester_is_empty() {
        let store = store();

        let courses = service(&store).list_course_instances(Some("19991")).await.unwrap();

        assert!(courses.is_empty());
    }

    struct BrokenPersons(InMemoryUnitOfWork);

    struct BrokenRepository;

    #[async_trait]
    impl Repository<Person> for BrokenRepository {
        async fn all(&self) -> Result<Vec<Person>, DomainError> {
            Err(DomainError::Repository("persons unavailable".to_string()))
        }

        async fn add(&self, _entity: Person) -> Result<(), DomainError> {
            Err(DomainError::Repository("persons unavailable".to_string()))
        }
    }

    impl HasRepository<Person> for BrokenPersons {
        fn repository(&self) -> &dyn Repository<Person> {
            &BrokenRepository
        }
    }

    impl HasRepository<CourseTemplate> for BrokenPersons {
        fn repository(&self) -> &dyn Repository<CourseTemplate> {
            HasRepository::<CourseTemplate>::repository(&self.0)
        }
    }

    impl HasRepository<CourseInstance> for BrokenPersons {
        fn repository(&self) -> &dyn Repository<CourseInstance> {
            HasRepository::<CourseInstance>::repository(&self.0)
        }
    }

    impl HasRepository<TeacherRegistration> for BrokenPersons {
        fn repository(&self) -> &dyn Repository<TeacherRegistration> {
            HasRepository::<TeacherRegistration>::repository(&self.0)
        }
    }

    #[async_trait]
    impl UnitOfWork for BrokenPersons {
        async fn save(&self) -> Result<(), DomainError> {
            self.0.save().await
        }
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let store = store();
        let service = SemesterReportService::new(
            Arc::new(BrokenPersons(store.unit_of_work())),
            ReportConfig::default(),
        );

        let err = service.list_course_instances(None).await.unwrap_err();

        assert!(matches!(err, DomainError::Repository(_)));
    }
}
