//! Person - Someone who can be registered as a teacher
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// Person, identified by their national identifier (SSN)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub ssn: String,
    pub name: String,
}

impl Person {
    pub fn new(ssn: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ssn: ssn.into(),
            name: name.into(),
        }
    }

    /// Summary handed back to callers after an assignment
    pub fn summary(&self) -> PersonSummary {
        PersonSummary {
            name: self.name.clone(),
            ssn: self.ssn.clone(),
        }
    }
}

/// Basic information about a person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonSummary {
    pub name: String,
    pub ssn: String,
}
