//! Courses API Routes
//!
//! - /api/courses - Semester report (course instances with main teacher)
//! - /api/courses/:id/teachers - Teacher assignment

pub mod course;
pub mod swagger;
