//! Courses Domain Library
//!
//! Core domain types, rules and interfaces for registering teachers on
//! course instances and reporting each instance's main teacher.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities
//!   - `entities/`: Person, CourseTemplate, CourseInstance, TeacherRegistration
//!   - `value_objects/`: TeacherType, ConflictReason
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: `Repository<T>`, `UnitOfWork`, `UnitOfWorkFactory`
//!
//! - **Application** (`application/`): Use cases
//!   - `TeacherAssignmentService`: assigns a person as main or assistant teacher
//!   - `SemesterReportService`: lists a semester's course instances with their main teacher
//!
//! - **Adapters** (`adapters/`): In-memory store implementing the ports
//!
//! # Usage
//!
//! ```rust,ignore
//! use courses::{InMemoryStore, TeacherAssignmentService, TeacherType, UnitOfWorkFactory};
//!
//! let store = InMemoryStore::demo();
//! let service = TeacherAssignmentService::new(store.begin());
//! let person = service.assign_teacher(1, "1234567890", TeacherType::MainTeacher).await?;
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use adapters::{InMemoryStore, InMemoryUnitOfWork};
pub use application::{CourseInstanceReportRow, SemesterReportService, TeacherAssignmentService};
pub use config::{ReportConfig, DEFAULT_SEMESTER};
pub use domain::{
    ConflictReason, CourseInstance, CourseInstanceSummary, CourseTemplate, DomainError, Entity,
    Person, PersonSummary, TeacherRegistration, TeacherType,
};
pub use ports::{HasRepository, Repository, UnitOfWork, UnitOfWorkExt, UnitOfWorkFactory};
