//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod conflict_reason;
mod teacher_type;

pub use conflict_reason::*;
pub use teacher_type::*;
