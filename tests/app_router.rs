mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::full_server;

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let server = full_server(false);

    let response = server.get("/projects/").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["_embedded"]["projects"], json!([]));
    assert_eq!(json["page"]["current_page"], 1);
    assert_eq!(json["page"]["per_page"], 10);
}

#[tokio::test]
async fn test_trailing_slash_on_resource_path() {
    let server = full_server(false);

    let created = server
        .post("/customers")
        .json(&json!({ "name": "Ada" }))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let response = server.get(&format!("/customers/{id}/")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["name"], "Ada");
}

#[tokio::test]
async fn test_health_through_full_router() {
    let server = full_server(false);

    let response = server.get("/health/").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "healthy");
}

#[tokio::test]
async fn test_resource_routes_are_rate_limited() {
    let server = full_server(false);

    let mut limited = None;
    for _ in 0..300 {
        let response = server.get("/projects").await;
        if response.status_code() == StatusCode::TOO_MANY_REQUESTS {
            limited = Some(response);
            break;
        }
    }

    let response = limited.expect("burst allowance should run out");
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "rate_limited");
    assert!(json["error"]["details"]["retry_after"].is_u64());

    // /health sits outside the limiter.
    server.get("/health").await.assert_status_ok();
}

#[tokio::test]
async fn test_proxy_clients_are_limited_separately() {
    let server = full_server(true);

    let mut exhausted = false;
    for _ in 0..300 {
        let response = server
            .get("/projects")
            .add_header("x-forwarded-for", "203.0.113.7")
            .await;
        if response.status_code() == StatusCode::TOO_MANY_REQUESTS {
            exhausted = true;
            break;
        }
    }
    assert!(exhausted);

    server
        .get("/projects")
        .add_header("x-forwarded-for", "198.51.100.20")
        .await
        .assert_status_ok();
}
