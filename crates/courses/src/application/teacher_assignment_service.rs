//! Teacher Assignment Service (Use Case)
//!
//! Validates and registers a person as a teacher of a course instance.

use std::sync::Arc;

use crate::domain::{
    ConflictReason, CourseInstance, DomainError, Entity, Person, PersonSummary,
    TeacherRegistration, TeacherType,
};
use crate::ports::{UnitOfWork, UnitOfWorkExt};

/// Application service for teacher assignment
pub struct TeacherAssignmentService<U: UnitOfWork + ?Sized> {
    uow: Arc<U>,
}

impl<U: UnitOfWork + ?Sized> TeacherAssignmentService<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Assign a person as teacher of a course instance.
    ///
    /// Checks run in a fixed order so the error kind is deterministic:
    /// course instance exists, person exists, person not already registered
    /// on the instance, and (for main teachers) the main teacher slot is free.
    /// On success one registration is staged and committed with a single save.
    pub async fn assign_teacher(
        &self,
        course_instance_id: i32,
        ssn: &str,
        teacher_type: TeacherType,
    ) -> Result<PersonSummary, DomainError> {
        let course_instance = self
            .uow
            .get_repository::<CourseInstance>()
            .all()
            .await?
            .into_iter()
            .find(|c| c.id == course_instance_id)
            .ok_or_else(|| DomainError::not_found(CourseInstance::NAME, course_instance_id))?;

        let person = self
            .uow
            .get_repository::<Person>()
            .all()
            .await?
            .into_iter()
            .find(|p| p.ssn == ssn)
            .ok_or_else(|| DomainError::not_found(Person::NAME, ssn))?;

        let registrations = self.uow.get_repository::<TeacherRegistration>();
        let existing: Vec<TeacherRegistration> = registrations
            .all()
            .await?
            .into_iter()
            .filter(|r| r.course_instance_id == course_instance.id)
            .collect();

        if existing.iter().any(|r| r.binds(course_instance.id, &person.ssn)) {
            return Err(reject(
                course_instance.id,
                ConflictReason::TeacherAlreadyAssignedToCourse,
            ));
        }

        if teacher_type == TeacherType::MainTeacher
            && existing.iter().any(TeacherRegistration::is_main_teacher)
        {
            return Err(reject(
                course_instance.id,
                ConflictReason::CourseAlreadyHasMainTeacher,
            ));
        }

        registrations
            .add(TeacherRegistration::new(
                course_instance.id,
                person.ssn.as_str(),
                teacher_type,
            ))
            .await?;
        self.uow.save().await?;

        tracing::info!(
            "Assigned {} of course instance {}",
            teacher_type,
            course_instance.id
        );

        Ok(person.summary())
    }
}

fn reject(course_instance_id: i32, reason: ConflictReason) -> DomainError {
    tracing::warn!(
        "Rejected teacher assignment to course instance {}: {}",
        course_instance_id,
        reason
    );
    DomainError::Conflict(reason)
}
