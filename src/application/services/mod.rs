//! Business logic services for the application layer.

pub mod customer_service;
pub mod project_service;

pub use customer_service::CustomerService;
pub use project_service::ProjectService;
