//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod customers;
pub mod health;
pub mod projects;

pub use customers::{
    create_customer_handler, delete_customer_handler, list_customers_handler,
    show_customer_handler, update_customer_handler,
};
pub use health::health_handler;
pub use projects::{
    create_project_handler, delete_project_handler, list_projects_handler, show_project_handler,
    update_project_handler,
};
