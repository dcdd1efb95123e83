mod common;

use axum_test::TestServer;
use serde_json::Value;
use sqlx::PgPool;

#[tokio::test]
async fn test_health_endpoint_memory() {
    let server = common::memory_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["database"]["status"], "ok");
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_health_endpoint_postgres(pool: PgPool) {
    let server = TestServer::new(common::app(common::create_pg_state(pool))).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["checks"]["database"]["status"],
        "ok"
    );
}
