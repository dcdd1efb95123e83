//! Repository implementations.
//!
//! - [`PgCustomerRepository`] / [`PgProjectRepository`] - PostgreSQL via SQLx
//! - [`InMemoryCustomerRepository`] / [`InMemoryProjectRepository`] - process-local
//!   tables sharing one [`MemoryStore`]
//!
//! Listings accept a caller-supplied sort field. The PostgreSQL repositories
//! quote it as an identifier, the in-memory ones look it up by column name;
//! in both cases an unknown field fails the query.

pub mod memory;
pub mod pg_customer_repository;
pub mod pg_project_repository;
mod sql;

pub use memory::{InMemoryCustomerRepository, InMemoryProjectRepository, MemoryStore};
pub use pg_customer_repository::PgCustomerRepository;
pub use pg_project_repository::PgProjectRepository;
