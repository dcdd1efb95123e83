//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::api::hateoas::LinkBuilder;
use crate::application::services::{CustomerService, ProjectService};
use crate::domain::repositories::{CustomerRepository, ProjectRepository};

/// Immutable after startup; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub project_service: Arc<ProjectService>,
    pub customer_service: Arc<CustomerService>,
    pub links: Arc<LinkBuilder>,
}

impl AppState {
    /// Wires services on top of a pair of repositories.
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        customers: Arc<dyn CustomerRepository>,
        links: LinkBuilder,
    ) -> Self {
        Self {
            project_service: Arc::new(ProjectService::new(projects, customers.clone())),
            customer_service: Arc::new(CustomerService::new(customers)),
            links: Arc::new(links),
        }
    }
}
