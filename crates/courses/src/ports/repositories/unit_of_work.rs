//! Unit of Work Port
//!
//! Groups the repositories of one request and owns its commit boundary.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    errors::DomainError, CourseInstance, CourseTemplate, Entity, Person, TeacherRegistration,
};

use super::Repository;

/// Access to the repository of one entity type
pub trait HasRepository<T: Entity> {
    fn repository(&self) -> &dyn Repository<T>;
}

/// Request-scoped unit of work over every entity collection
#[async_trait]
pub trait UnitOfWork:
    HasRepository<Person>
    + HasRepository<CourseTemplate>
    + HasRepository<CourseInstance>
    + HasRepository<TeacherRegistration>
    + Send
    + Sync
{
    /// Commit all staged changes atomically
    async fn save(&self) -> Result<(), DomainError>;
}

/// Typed repository lookup, `uow.get_repository::<Person>()`
pub trait UnitOfWorkExt {
    fn get_repository<T: Entity>(&self) -> &dyn Repository<T>
    where
        Self: HasRepository<T>;
}

impl<U: UnitOfWork + ?Sized> UnitOfWorkExt for U {
    fn get_repository<T: Entity>(&self) -> &dyn Repository<T>
    where
        Self: HasRepository<T>,
    {
        HasRepository::<T>::repository(self)
    }
}

/// Opens a fresh unit of work per request
pub trait UnitOfWorkFactory: Send + Sync {
    fn begin(&self) -> Arc<dyn UnitOfWork>;
}
