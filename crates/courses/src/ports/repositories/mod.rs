//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod repository;
mod unit_of_work;

pub use repository::*;
pub use unit_of_work::*;
