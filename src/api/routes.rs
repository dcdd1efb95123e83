//! API route configuration.

use crate::api::handlers::{
    create_customer_handler, create_project_handler, delete_customer_handler,
    delete_project_handler, list_customers_handler, list_projects_handler, show_customer_handler,
    show_project_handler, update_customer_handler, update_project_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Resource routes.
///
/// # Endpoints
///
/// - `GET    /projects`          - List projects (paginated, sortable)
/// - `POST   /projects`          - Create a project
/// - `GET    /projects/{id}`     - Show a project
/// - `PUT    /projects/{id}`     - Update a project
/// - `DELETE /projects/{id}`     - Soft-delete a project
/// - `GET    /customers`         - List customers (paginated, sortable)
/// - `POST   /customers`         - Create a customer
/// - `GET    /customers/{id}`    - Show a customer
/// - `PUT    /customers/{id}`    - Update a customer
/// - `DELETE /customers/{id}`    - Delete a customer
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/projects",
            get(list_projects_handler).post(create_project_handler),
        )
        .route(
            "/projects/{id}",
            get(show_project_handler)
                .put(update_project_handler)
                .delete(delete_project_handler),
        )
        .route(
            "/customers",
            get(list_customers_handler).post(create_customer_handler),
        )
        .route(
            "/customers/{id}",
            get(show_customer_handler)
                .put(update_customer_handler)
                .delete(delete_customer_handler),
        )
}
