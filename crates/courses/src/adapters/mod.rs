//! Adapters
//!
//! Implementations of the repository ports.

pub mod memory;

// Re-exports
pub use memory::{InMemoryRepository, InMemoryStore, InMemoryUnitOfWork};
