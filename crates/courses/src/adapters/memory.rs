//! In-memory implementation of the repository ports
//!
//! Backs the demo server mode and the service tests. Each unit of work
//! stages its own additions; committed data is shared through the store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;

use crate::domain::{
    errors::DomainError, CourseInstance, CourseTemplate, Entity, Person, TeacherRegistration,
    TeacherType,
};
use crate::ports::{HasRepository, Repository, UnitOfWork, UnitOfWorkFactory};

type Table<T> = Arc<RwLock<Vec<T>>>;

fn poisoned<T: Entity>() -> DomainError {
    DomainError::Repository(format!("{} table lock poisoned", T::NAME))
}

/// Shared committed state
#[derive(Clone, Default)]
pub struct InMemoryStore {
    persons: Table<Person>,
    templates: Table<CourseTemplate>,
    instances: Table<CourseInstance>,
    registrations: Table<TeacherRegistration>,
    commits: Arc<AtomicUsize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with one course instance and one person
    pub fn demo() -> Self {
        Self::new()
            .with_template(CourseTemplate::new("T-514-VEFT", "Vefþjónustur"))
            .with_template(CourseTemplate::new("T-111-PROG", "Forritun"))
            .with_instance(CourseInstance::new(1, "T-514-VEFT", "20153"))
            .with_instance(CourseInstance::new(2, "T-111-PROG", "20153"))
            .with_instance(CourseInstance::new(3, "T-111-PROG", "20161"))
            .with_person(Person::new("1234567890", "Jane Doe"))
            .with_person(Person::new("1234567891", "John Doe"))
    }

    pub fn with_person(self, person: Person) -> Self {
        push(&self.persons, person);
        self
    }

    pub fn with_template(self, template: CourseTemplate) -> Self {
        push(&self.templates, template);
        self
    }

    pub fn with_instance(self, instance: CourseInstance) -> Self {
        push(&self.instances, instance);
        self
    }

    pub fn with_registration(
        self,
        course_instance_id: i32,
        ssn: &str,
        teacher_type: TeacherType,
    ) -> Self {
        push(
            &self.registrations,
            TeacherRegistration::new(course_instance_id, ssn, teacher_type),
        );
        self
    }

    /// Committed registrations
    pub fn registrations(&self) -> Vec<TeacherRegistration> {
        self.registrations
            .read()
            .map(|rows| rows.clone())
            .unwrap_or_default()
    }

    /// Number of successful `save()` calls across all units of work
    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    pub fn unit_of_work(&self) -> InMemoryUnitOfWork {
        InMemoryUnitOfWork {
            persons: InMemoryRepository::new(self.persons.clone()),
            templates: InMemoryRepository::new(self.templates.clone()),
            instances: InMemoryRepository::new(self.instances.clone()),
            registrations: InMemoryRepository::new(self.registrations.clone()),
            commits: self.commits.clone(),
        }
    }
}

fn push<T>(table: &Table<T>, row: T) {
    if let Ok(mut rows) = table.write() {
        rows.push(row);
    }
}

impl UnitOfWorkFactory for InMemoryStore {
    fn begin(&self) -> Arc<dyn UnitOfWork> {
        Arc::new(self.unit_of_work())
    }
}

/// Repository over one shared table with a private staging area
pub struct InMemoryRepository<T> {
    committed: Table<T>,
    staged: Mutex<Vec<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    fn new(committed: Table<T>) -> Self {
        Self {
            committed,
            staged: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn all(&self) -> Result<Vec<T>, DomainError> {
        let rows = self.committed.read().map_err(|_| poisoned::<T>())?;
        Ok(rows.clone())
    }

    async fn add(&self, entity: T) -> Result<(), DomainError> {
        self.staged
            .lock()
            .map_err(|_| poisoned::<T>())?
            .push(entity);
        Ok(())
    }
}

/// Request-scoped unit of work over an [`InMemoryStore`]
pub struct InMemoryUnitOfWork {
    persons: InMemoryRepository<Person>,
    templates: InMemoryRepository<CourseTemplate>,
    instances: InMemoryRepository<CourseInstance>,
    registrations: InMemoryRepository<TeacherRegistration>,
    commits: Arc<AtomicUsize>,
}

impl HasRepository<Person> for InMemoryUnitOfWork {
    fn repository(&self) -> &dyn Repository<Person> {
        &self.persons
    }
}

impl HasRepository<CourseTemplate> for InMemoryUnitOfWork {
    fn repository(&self) -> &dyn Repository<CourseTemplate> {
        &self.templates
    }
}

impl HasRepository<CourseInstance> for InMemoryUnitOfWork {
    fn repository(&self) -> &dyn Repository<CourseInstance> {
        &self.instances
    }
}

impl HasRepository<TeacherRegistration> for InMemoryUnitOfWork {
    fn repository(&self) -> &dyn Repository<TeacherRegistration> {
        &self.registrations
    }
}

/// Rejects staged registrations that would break the per-instance invariants
fn check_registrations(
    committed: &[TeacherRegistration],
    staged: &[TeacherRegistration],
) -> Result<(), DomainError> {
    let mut seen: Vec<&TeacherRegistration> = committed.iter().collect();
    for row in staged {
        if seen.iter().any(|r| r.binds(row.course_instance_id, &row.ssn)) {
            return Err(DomainError::Repository(format!(
                "duplicate teacher registration on course instance {}",
                row.course_instance_id
            )));
        }
        if row.is_main_teacher()
            && seen
                .iter()
                .any(|r| r.course_instance_id == row.course_instance_id && r.is_main_teacher())
        {
            return Err(DomainError::Repository(format!(
                "second main teacher on course instance {}",
                row.course_instance_id
            )));
        }
        seen.push(row);
    }
    Ok(())
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn save(&self) -> Result<(), DomainError> {
        // Tables are always locked in this order; every write guard is held
        // before anything is applied.
        let mut persons = self
            .persons
            .committed
            .write()
            .map_err(|_| poisoned::<Person>())?;
        let mut templates = self
            .templates
            .committed
            .write()
            .map_err(|_| poisoned::<CourseTemplate>())?;
        let mut instances = self
            .instances
            .committed
            .write()
            .map_err(|_| poisoned::<CourseInstance>())?;
        let mut registrations = self
            .registrations
            .committed
            .write()
            .map_err(|_| poisoned::<TeacherRegistration>())?;

        let mut staged_persons = self.persons.staged.lock().map_err(|_| poisoned::<Person>())?;
        let mut staged_templates = self
            .templates
            .staged
            .lock()
            .map_err(|_| poisoned::<CourseTemplate>())?;
        let mut staged_instances = self
            .instances
            .staged
            .lock()
            .map_err(|_| poisoned::<CourseInstance>())?;
        let mut staged_registrations = self
            .registrations
            .staged
            .lock()
            .map_err(|_| poisoned::<TeacherRegistration>())?;

        check_registrations(&registrations, &staged_registrations)?;

        persons.append(&mut staged_persons);
        templates.append(&mut staged_templates);
        instances.append(&mut staged_instances);
        registrations.append(&mut staged_registrations);

        self.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::UnitOfWorkExt;

    #[tokio::test]
    async fn test_added_rows_are_invisible_until_save() {
        let store = InMemoryStore::demo();
        let uow = store.unit_of_work();

        uow.get_repository::<TeacherRegistration>()
            .add(TeacherRegistration::new(1, "1234567890", TeacherType::MainTeacher))
            .await
            .unwrap();

        assert!(uow
            .get_repository::<TeacherRegistration>()
            .all()
            .await
            .unwrap()
            .is_empty());

        uow.save().await.unwrap();

        assert_eq!(store.registrations().len(), 1);
        assert_eq!(store.commit_count(), 1);
    }

    #[tokio::test]
    async fn test_units_of_work_do_not_share_staged_rows() {
        let store = InMemoryStore::demo();
        let first = store.unit_of_work();
        let second = store.unit_of_work();

        first
            .get_repository::<TeacherRegistration>()
            .add(TeacherRegistration::new(1, "1234567890", TeacherType::MainTeacher))
            .await
            .unwrap();
        second.save().await.unwrap();

        assert!(store.registrations().is_empty());

        first.save().await.unwrap();
        let committed = second
            .get_repository::<TeacherRegistration>()
            .all()
            .await
            .unwrap();
        assert_eq!(committed.len(), 1);
    }

    #[tokio::test]
    async fn test_demo_store_contents() {
        let store = InMemoryStore::demo();
        let uow = store.begin();

        let persons = uow.get_repository::<Person>().all().await.unwrap();
        let instances = uow.get_repository::<CourseInstance>().all().await.unwrap();

        assert!(persons.iter().any(|p| p.ssn == "1234567890" && p.name == "Jane Doe"));
        assert!(instances
            .iter()
            .any(|c| c.id == 1 && c.course_id == "T-514-VEFT" && c.semester == "20153"));
    }

    async fn stage(uow: &InMemoryUnitOfWork, ssn: &str, teacher_type: TeacherType) {
        uow.get_repository::<TeacherRegistration>()
            .add(TeacherRegistration::new(1, ssn, teacher_type))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_racing_main_teachers_only_first_commits() {
        let store = InMemoryStore::demo();
        let first = store.unit_of_work();
        let second = store.unit_of_work();

        stage(&first, "1234567890", TeacherType::MainTeacher).await;
        stage(&second, "1234567891", TeacherType::MainTeacher).await;

        first.save().await.unwrap();
        let err = second.save().await.unwrap_err();

        assert!(matches!(err, DomainError::Repository(_)));
        let mains = store
            .registrations()
            .iter()
            .filter(|r| r.course_instance_id == 1 && r.is_main_teacher())
            .count();
        assert_eq!(mains, 1);
        assert_eq!(store.commit_count(), 1);

        // Rejected rows stay staged, so retrying fails the same way
        assert!(second.save().await.is_err());
    }

    #[tokio::test]
    async fn test_racing_duplicate_person_only_first_commits() {
        let store = InMemoryStore::demo();
        let first = store.unit_of_work();
        let second = store.unit_of_work();

        stage(&first, "1234567890", TeacherType::AssistantTeacher).await;
        stage(&second, "1234567890", TeacherType::AssistantTeacher).await;

        first.save().await.unwrap();
        assert!(matches!(
            second.save().await,
            Err(DomainError::Repository(_))
        ));
        assert_eq!(store.registrations().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicates_within_one_save_are_rejected() {
        let store = InMemoryStore::demo();
        let uow = store.unit_of_work();

        stage(&uow, "1234567890", TeacherType::MainTeacher).await;
        stage(&uow, "1234567891", TeacherType::MainTeacher).await;

        assert!(uow.save().await.is_err());
        assert!(store.registrations().is_empty());
    }

    #[tokio::test]
    async fn test_save_is_all_or_nothing_when_a_table_is_poisoned() {
        let store = InMemoryStore::demo();
        let uow = store.unit_of_work();

        uow.get_repository::<Person>()
            .add(Person::new("1234567899", "Joan Doe"))
            .await
            .unwrap();
        stage(&uow, "1234567899", TeacherType::AssistantTeacher).await;

        let table = store.registrations.clone();
        let _ = std::thread::spawn(move || {
            let _guard = table.write().unwrap();
            panic!("poison registrations table");
        })
        .join();

        assert!(matches!(uow.save().await, Err(DomainError::Repository(_))));

        let persons = uow.get_repository::<Person>().all().await.unwrap();
        assert!(persons.iter().all(|p| p.ssn != "1234567899"));
        assert_eq!(store.commit_count(), 0);
    }
}
