//! Generic Repository Port
//!
//! Abstract interface for entity collections.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Entity};

/// Repository interface for one entity type
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Return the full current set of entities
    async fn all(&self) -> Result<Vec<T>, DomainError>;

    /// Stage a new entity; it is persisted by the next [`UnitOfWork::save`]
    ///
    /// [`UnitOfWork::save`]: super::UnitOfWork::save
    async fn add(&self, entity: T) -> Result<(), DomainError>;
}
