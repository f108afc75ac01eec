//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

use crate::domain::value_objects::ConflictReason;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(ConflictReason),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>, I: std::fmt::Display>(entity_type: T, id: I) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    /// Reason code for conflicts, if this is one
    pub fn conflict_reason(&self) -> Option<ConflictReason> {
        match self {
            Self::Conflict(reason) => Some(*reason),
            _ => None,
        }
    }
}
