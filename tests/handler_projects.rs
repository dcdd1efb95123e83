mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::{create_customer, create_project, memory_server, names};

#[tokio::test]
async fn test_create_project_returns_resource_with_links() {
    let server = memory_server();

    let response = server
        .post("/projects")
        .json(&json!({
            "name": "Apollo",
            "description": "Lunar landing programme"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    let id = json["id"].as_i64().unwrap();
    let href = format!("http://localhost:3000/projects/{id}");

    assert_eq!(json["name"], "Apollo");
    assert_eq!(json["description"], "Lunar landing programme");
    assert!(json["customer_id"].is_null());
    assert!(json.get("deleted_at").is_none());

    assert_eq!(json["_links"]["self"], json!({ "href": href }));
    assert_eq!(
        json["_links"]["update"],
        json!({ "method": "PUT", "href": href })
    );
    assert_eq!(
        json["_links"]["delete"],
        json!({ "method": "DELETE", "href": href })
    );
    assert_eq!(
        json["_links"]["list"],
        json!({ "href": "http://localhost:3000/projects" })
    );
}

#[tokio::test]
async fn test_create_project_duplicate_name() {
    let server = memory_server();
    create_project(&server, "Apollo").await;

    let response = server
        .post("/projects")
        .json(&json!({ "name": "Apollo" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(
        json["error"]["details"]["name"],
        json!(["The name has already been taken."])
    );

    let list = server.get("/projects").await.json::<Value>();
    assert_eq!(list["page"]["total"], 1);
}

#[tokio::test]
async fn test_create_project_name_required() {
    let server = memory_server();

    let response = server
        .post("/projects")
        .json(&json!({ "description": "Lunar landing programme" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(
        json["error"]["details"]["name"],
        json!(["The name field is required."])
    );
}

#[tokio::test]
async fn test_create_project_short_description() {
    let server = memory_server();

    let response = server
        .post("/projects")
        .json(&json!({ "name": "Apollo", "description": "short" }))
        .await;

    response.assert_status_bad_request();
    assert!(
        response.json::<Value>()["error"]["details"]
            .get("description")
            .is_some()
    );
}

#[tokio::test]
async fn test_create_project_malformed_json() {
    let server = memory_server();

    let response = server
        .post("/projects")
        .content_type("application/json")
        .text("{ not json")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["body"].is_array());
}

#[tokio::test]
async fn test_create_project_unknown_customer() {
    let server = memory_server();

    let response = server
        .post("/projects")
        .json(&json!({ "name": "Apollo", "customer_id": 999 }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["error"]["details"]["customer_id"],
        json!(["The selected customer id is invalid."])
    );
}

#[tokio::test]
async fn test_project_with_customer_links_to_it() {
    let server = memory_server();
    let customer = create_customer(&server, "Ada").await;
    let customer_id = customer["id"].as_i64().unwrap();

    let response = server
        .post("/projects")
        .json(&json!({ "name": "Apollo", "customer_id": customer_id }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    assert_eq!(json["customer_id"], customer_id);
    assert_eq!(
        json["_links"]["customer"]["href"],
        format!("http://localhost:3000/customers/{customer_id}")
    );
}

#[tokio::test]
async fn test_show_project() {
    let server = memory_server();
    let created = create_project(&server, "Apollo").await;
    let id = created["id"].as_i64().unwrap();

    let response = server.get(&format!("/projects/{id}")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["name"], "Apollo");
}

#[tokio::test]
async fn test_show_missing_project() {
    let server = memory_server();

    let response = server.get("/projects/999").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_update_project_partial() {
    let server = memory_server();
    let created = server
        .post("/projects")
        .json(&json!({ "name": "Apollo", "description": "Lunar landing programme" }))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/projects/{id}"))
        .json(&json!({ "name": "Artemis" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["name"], "Artemis");
    assert_eq!(json["description"], "Lunar landing programme");

    let response = server
        .put(&format!("/projects/{id}"))
        .json(&json!({ "name": "Artemis", "description": null }))
        .await;

    response.assert_status_ok();
    assert!(response.json::<Value>()["description"].is_null());
}

#[tokio::test]
async fn test_update_project_keeps_own_name() {
    let server = memory_server();
    let created = create_project(&server, "Apollo").await;
    let id = created["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/projects/{id}"))
        .json(&json!({ "name": "Apollo", "description": "Still the same project" }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_update_project_to_taken_name() {
    let server = memory_server();
    create_project(&server, "Apollo").await;
    let gemini = create_project(&server, "Gemini").await;
    let id = gemini["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/projects/{id}"))
        .json(&json!({ "name": "Apollo" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_update_missing_project() {
    let server = memory_server();

    let response = server
        .put("/projects/999")
        .json(&json!({ "name": "Apollo" }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_project_twice() {
    let server = memory_server();
    let created = create_project(&server, "Apollo").await;
    let id = created["id"].as_i64().unwrap();

    let response = server.delete(&format!("/projects/{id}")).await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["message"], "Project deleted successfully");
    assert_eq!(
        json["_links"],
        json!({
            "list": { "href": "http://localhost:3000/projects" },
            "create": { "method": "POST", "href": "http://localhost:3000/projects" }
        })
    );

    server
        .delete(&format!("/projects/{id}"))
        .await
        .assert_status_not_found();
    server
        .get(&format!("/projects/{id}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_deleted_project_name_stays_reserved() {
    let server = memory_server();
    let created = create_project(&server, "Apollo").await;
    let id = created["id"].as_i64().unwrap();
    server.delete(&format!("/projects/{id}")).await.assert_status_ok();

    let response = server
        .post("/projects")
        .json(&json!({ "name": "Apollo" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_list_projects_sorted_desc() {
    let server = memory_server();
    for name in ["Beta", "Alpha", "Gamma"] {
        create_project(&server, name).await;
    }

    let response = server
        .get("/projects")
        .add_query_param("sort", "name")
        .add_query_param("direction", "desc")
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(names(&json, "projects"), ["Gamma", "Beta", "Alpha"]);
    assert_eq!(json["sort"], json!({ "field": "name", "direction": "desc" }));
}

#[tokio::test]
async fn test_list_projects_invalid_direction_is_asc() {
    let server = memory_server();
    for name in ["Beta", "Alpha", "Gamma"] {
        create_project(&server, name).await;
    }

    let response = server
        .get("/projects")
        .add_query_param("sort", "name")
        .add_query_param("direction", "sideways")
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(names(&json, "projects"), ["Alpha", "Beta", "Gamma"]);
    assert_eq!(json["sort"]["direction"], "asc");
}

#[tokio::test]
async fn test_list_projects_default_order_is_by_id() {
    let server = memory_server();
    for name in ["Beta", "Alpha", "Gamma"] {
        create_project(&server, name).await;
    }

    let json = server.get("/projects").await.json::<Value>();

    assert_eq!(names(&json, "projects"), ["Beta", "Alpha", "Gamma"]);
    assert!(json.get("sort").is_none());
}

#[tokio::test]
async fn test_list_projects_pagination() {
    let server = memory_server();
    for i in 1..=5 {
        create_project(&server, &format!("Project {i}")).await;
    }

    let response = server
        .get("/projects")
        .add_query_param("page", 2)
        .add_query_param("per_page", 2)
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(
        json["page"],
        json!({ "current_page": 2, "per_page": 2, "total": 5, "last_page": 3 })
    );
    assert_eq!(names(&json, "projects"), ["Project 3", "Project 4"]);
    assert_eq!(
        json["_links"]["next"]["href"],
        "http://localhost:3000/projects?page=3&per_page=2"
    );
    assert_eq!(
        json["_links"]["prev"]["href"],
        "http://localhost:3000/projects?page=1&per_page=2"
    );
    assert_eq!(
        json["_links"]["last"]["href"],
        "http://localhost:3000/projects?page=3&per_page=2"
    );
    assert_eq!(json["_links"]["create"]["method"], "POST");
}

#[tokio::test]
async fn test_list_projects_bad_paging_values_use_defaults() {
    let server = memory_server();
    create_project(&server, "Apollo").await;

    let json = server
        .get("/projects")
        .add_query_param("page", "zero")
        .add_query_param("per_page", -4)
        .await
        .json::<Value>();

    assert_eq!(json["page"]["current_page"], 1);
    assert_eq!(json["page"]["per_page"], 10);
}

#[tokio::test]
async fn test_list_projects_empty() {
    let server = memory_server();

    let json = server.get("/projects").await.json::<Value>();

    assert_eq!(json["page"]["total"], 0);
    assert_eq!(json["page"]["last_page"], 0);
    assert_eq!(json["_embedded"]["projects"], json!([]));
    assert!(json["_links"]["next"].is_null());
    assert!(json["_links"]["prev"].is_null());
}

#[tokio::test]
async fn test_list_projects_hides_deleted() {
    let server = memory_server();
    let apollo = create_project(&server, "Apollo").await;
    create_project(&server, "Gemini").await;
    let id = apollo["id"].as_i64().unwrap();
    server.delete(&format!("/projects/{id}")).await.assert_status_ok();

    let json = server.get("/projects").await.json::<Value>();

    assert_eq!(names(&json, "projects"), ["Gemini"]);
    assert_eq!(json["page"]["total"], 1);
}

#[tokio::test]
async fn test_list_projects_unknown_sort_field() {
    let server = memory_server();
    create_project(&server, "Apollo").await;

    let response = server
        .get("/projects")
        .add_query_param("sort", "no_such_column")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["error"]["code"], "internal_error");
}

#[tokio::test]
async fn test_list_projects_repeated_query_keys() {
    let server = memory_server();
    for name in ["Alpha", "Beta", "Gamma"] {
        create_project(&server, name).await;
    }

    let response = server
        .get("/projects?page=1&page=2&per_page=2&sort=name&sort=id&direction=desc")
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["page"]["current_page"], 1);
    assert_eq!(json["page"]["per_page"], 2);
    assert_eq!(names(&json, "projects"), ["Gamma", "Beta"]);
}

#[tokio::test]
async fn test_show_project_non_numeric_id() {
    let server = memory_server();

    let response = server.get("/projects/abc").await;

    response.assert_status_not_found();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert!(json["error"]["details"]["path"].is_array());
}

#[tokio::test]
async fn test_delete_project_overflowing_id() {
    let server = memory_server();

    let response = server.delete("/projects/99999999999999999999").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_create_project_wrong_type_keyed_by_field() {
    let server = memory_server();

    let response = server.post("/projects").json(&json!({ "name": 5 })).await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["name"].is_array());
    assert!(json["error"]["details"].get("body").is_none());
}
