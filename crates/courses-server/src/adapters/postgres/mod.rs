//! PostgreSQL Repository Implementations

mod entities;
mod unit_of_work;

pub use unit_of_work::PgUnitOfWorkFactory;
