//! Courses API Data Models
//!
//! - Course: semester report rows
//! - Teacher: assignment request and person response

mod course;
mod teacher;

pub use course::*;
pub use teacher::*;
