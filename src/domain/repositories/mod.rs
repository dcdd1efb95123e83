//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for service tests.
//!
//! - [`CustomerRepository`] - Customer CRUD
//! - [`ProjectRepository`] - Project CRUD with soft delete
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod customer_repository;
pub mod project_repository;

pub use customer_repository::CustomerRepository;
pub use project_repository::ProjectRepository;

#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
#[cfg(test)]
pub use project_repository::MockProjectRepository;
