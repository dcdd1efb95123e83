//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls and enforce the rules that need
//! storage access. Handlers talk to services only.
//!
//! - [`services::customer_service::CustomerService`] - Customer CRUD
//! - [`services::project_service::ProjectService`] - Project CRUD, name uniqueness, soft delete

pub mod services;
