//! PostgreSQL implementation of UnitOfWork

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use courses::{
    CourseInstance, CourseTemplate, DomainError, HasRepository, Person, Repository,
    TeacherRegistration, UnitOfWork, UnitOfWorkFactory,
};

use super::entities::PgEntity;

/// Table-backed repository; additions wait in memory until the unit of work saves
pub struct PgRepository<T> {
    pool: PgPool,
    staged: Mutex<Vec<T>>,
}

impl<T: PgEntity> PgRepository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            staged: Mutex::new(Vec::new()),
        }
    }

    fn take_staged(&self) -> Result<Vec<T>, DomainError> {
        let mut staged = self
            .staged
            .lock()
            .map_err(|_| DomainError::Repository(format!("{} staging lock poisoned", T::NAME)))?;
        Ok(std::mem::take(&mut *staged))
    }

    async fn flush(&self, conn: &mut PgConnection) -> Result<usize, DomainError> {
        let rows = self.take_staged()?;
        for row in &rows {
            row.insert(&mut *conn)
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?;
        }
        Ok(rows.len())
    }
}

#[async_trait]
impl<T: PgEntity> Repository<T> for PgRepository<T> {
    async fn all(&self) -> Result<Vec<T>, DomainError> {
        let rows = sqlx::query_as::<_, T::Row>(T::SELECT)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        rows.into_iter().map(T::from_row).collect()
    }

    async fn add(&self, entity: T) -> Result<(), DomainError> {
        self.staged
            .lock()
            .map_err(|_| DomainError::Repository(format!("{} staging lock poisoned", T::NAME)))?
            .push(entity);
        Ok(())
    }
}

/// Request-scoped unit of work committing through one transaction
pub struct PgUnitOfWork {
    pool: PgPool,
    persons: PgRepository<Person>,
    templates: PgRepository<CourseTemplate>,
    instances: PgRepository<CourseInstance>,
    registrations: PgRepository<TeacherRegistration>,
}

impl PgUnitOfWork {
    pub fn new(pool: PgPool) -> Self {
        Self {
            persons: PgRepository::new(pool.clone()),
            templates: PgRepository::new(pool.clone()),
            instances: PgRepository::new(pool.clone()),
            registrations: PgRepository::new(pool.clone()),
            pool,
        }
    }
}

impl HasRepository<Person> for PgUnitOfWork {
    fn repository(&self) -> &dyn Repository<Person> {
        &self.persons
    }
}

impl HasRepository<CourseTemplate> for PgUnitOfWork {
    fn repository(&self) -> &dyn Repository<CourseTemplate> {
        &self.templates
    }
}

impl HasRepository<CourseInstance> for PgUnitOfWork {
    fn repository(&self) -> &dyn Repository<CourseInstance> {
        &self.instances
    }
}

impl HasRepository<TeacherRegistration> for PgUnitOfWork {
    fn repository(&self) -> &dyn Repository<TeacherRegistration> {
        &self.registrations
    }
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    async fn save(&self) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        // Parents before children so foreign keys resolve inside the transaction
        let mut written = self.persons.flush(&mut tx).await?;
        written += self.templates.flush(&mut tx).await?;
        written += self.instances.flush(&mut tx).await?;
        written += self.registrations.flush(&mut tx).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        tracing::debug!("Committed {} staged rows", written);
        Ok(())
    }
}

/// Opens a [`PgUnitOfWork`] per request
pub struct PgUnitOfWorkFactory {
    pool: PgPool,
}

impl PgUnitOfWorkFactory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UnitOfWorkFactory for PgUnitOfWorkFactory {
    fn begin(&self) -> Arc<dyn UnitOfWork> {
        Arc::new(PgUnitOfWork::new(self.pool.clone()))
    }
}
