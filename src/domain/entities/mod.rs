//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures. Each one comes with a `New*` struct for
//! inserts and a `*Patch` struct for partial updates:
//!
//! - [`Customer`] / [`NewCustomer`] / [`CustomerPatch`]
//! - [`Project`] / [`NewProject`] / [`ProjectPatch`]

pub mod customer;
pub mod project;

pub use customer::{Customer, CustomerPatch, NewCustomer};
pub use project::{NewProject, Project, ProjectPatch};
