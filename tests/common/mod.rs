#![allow(dead_code)]

use axum::{Router, ServiceExt, extract::Request, routing::get};
use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;

use projects_api::api::handlers::health_handler;
use projects_api::api::hateoas::LinkBuilder;
use projects_api::api::routes::resource_routes;
use projects_api::infrastructure::persistence::{
    InMemoryCustomerRepository, InMemoryProjectRepository, MemoryStore, PgCustomerRepository,
    PgProjectRepository,
};
use projects_api::routes::app_router;
use projects_api::state::AppState;

pub const BASE_URL: &str = "http://localhost:3000";

pub fn links() -> LinkBuilder {
    LinkBuilder::parse(BASE_URL).unwrap()
}

pub fn create_memory_state() -> AppState {
    let store = Arc::new(MemoryStore::new());

    AppState::new(
        Arc::new(InMemoryProjectRepository::new(store.clone())),
        Arc::new(InMemoryCustomerRepository::new(store)),
        links(),
    )
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    AppState::new(
        Arc::new(PgProjectRepository::new(pool.clone())),
        Arc::new(PgCustomerRepository::new(pool)),
        links(),
    )
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(resource_routes())
        .with_state(state)
}

pub fn memory_server() -> TestServer {
    TestServer::new(app(create_memory_state())).unwrap()
}

/// Serves the production router, middleware included, over a real socket so
/// the rate limiter can read the peer address.
pub fn full_server(behind_proxy: bool) -> TestServer {
    let router = app_router(create_memory_state(), behind_proxy);
    let service = ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(router);

    TestServer::new(service).unwrap()
}

pub async fn create_project(server: &TestServer, name: &str) -> Value {
    server
        .post("/projects")
        .json(&json!({ "name": name }))
        .await
        .json::<Value>()
}

pub async fn create_customer(server: &TestServer, name: &str) -> Value {
    server
        .post("/customers")
        .json(&json!({ "name": name }))
        .await
        .json::<Value>()
}

pub fn names(body: &Value, collection: &str) -> Vec<String> {
    body["_embedded"][collection]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect()
}
