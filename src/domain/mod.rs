//! Domain layer containing business entities and repository contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits are implemented in
//! [`crate::infrastructure::persistence`]; services that orchestrate them live in
//! [`crate::application::services`].
//!
//! - [`entities`] - Customers and projects
//! - [`listing`] - Page/sort request and page result types
//! - [`messages`] - Validation messages
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod listing;
pub mod messages;
pub mod repositories;
