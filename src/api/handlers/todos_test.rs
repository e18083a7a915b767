//! Integration tests for the todo endpoints.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use crate::api::{AppState, TodoResponse, create_router};
use crate::db::{Database, SqliteDatabase, Todo};

async fn test_state() -> AppState<SqliteDatabase> {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");
    AppState::new(db)
}

async fn test_app() -> axum::Router {
    create_router(test_state().await, false, CancellationToken::new())
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

// =============================================================================
// End-to-end lifecycle
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn todo_lifecycle() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/todos", json!({"content": "buy milk"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        json_body(response).await,
        json!({"todo_id": 1, "content": "buy milk", "completed": false})
    );

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/todos/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"todo_id": 1, "content": "buy milk", "completed": false})
    );

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/todos/1", json!({"completed": true})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"todo_id": 1, "content": "buy milk", "completed": true})
    );

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/todos/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.is_empty());

    let response = app
        .oneshot(empty_request("GET", "/todos/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await, json!({"detail": "Todo not found"}));
}

// =============================================================================
// GET /todos
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn list_todos_initially_empty() {
    let app = test_app().await;

    let response = app.oneshot(empty_request("GET", "/todos")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_todos_returns_every_item_in_id_order() {
    let app = test_app().await;

    for content in ["first", "second", "third"] {
        app.clone()
            .oneshot(json_request("POST", "/todos", json!({"content": content})))
            .await
            .unwrap();
    }

    let response = app.oneshot(empty_request("GET", "/todos")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 3);
    let ids: Vec<i64> = items.iter().map(|t| t["todo_id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(items[1]["content"], "second");
}

// =============================================================================
// POST /todos
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn create_todo_accepts_empty_content() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request("POST", "/todos", json!({"content": ""})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["content"], "");
    assert_eq!(body["completed"], false);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_todo_without_content_is_unprocessable() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/todos", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json_body(response).await,
        json!({"detail": "content: field required"})
    );

    // Nothing was stored
    let response = app.oneshot(empty_request("GET", "/todos")).await.unwrap();
    assert_eq!(json_body(response).await, json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_todo_with_wrong_type_is_unprocessable() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request("POST", "/todos", json!({"content": 42})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert!(body["detail"].as_str().unwrap().contains("content"));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_todo_with_malformed_json_is_bad_request() {
    let app = test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/todos")
        .header("content-type", "application/json")
        .body(Body::from("{\"content\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["detail"].is_string());
}

#[tokio::test(flavor = "multi_thread")]
async fn create_todo_without_json_content_type_is_unsupported() {
    let app = test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/todos")
        .body(Body::from("{\"content\": \"x\"}"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

// =============================================================================
// GET / PUT / DELETE /todos/{todo_id}
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn non_integer_id_is_bad_request() {
    let app = test_app().await;

    for (method, request) in [
        ("GET", empty_request("GET", "/todos/abc")),
        ("PUT", json_request("PUT", "/todos/abc", json!({"completed": true}))),
        ("DELETE", empty_request("DELETE", "/todos/abc")),
    ] {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{method}");
        let body = json_body(response).await;
        assert!(body["detail"].is_string(), "{method}");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_id_is_not_found_for_every_item_operation() {
    let app = test_app().await;

    for request in [
        empty_request("GET", "/todos/999"),
        json_request("PUT", "/todos/999", json!({"content": "x"})),
        empty_request("DELETE", "/todos/999"),
    ] {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await, json!({"detail": "Todo not found"}));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn update_content_keeps_completed() {
    let app = test_app().await;

    app.clone()
        .oneshot(json_request("POST", "/todos", json!({"content": "draft"})))
        .await
        .unwrap();
    app.clone()
        .oneshot(json_request("PUT", "/todos/1", json!({"completed": true})))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request("PUT", "/todos/1", json!({"content": "final"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"todo_id": 1, "content": "final", "completed": true})
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn update_with_nulls_or_empty_body_leaves_item_unchanged() {
    let app = test_app().await;

    app.clone()
        .oneshot(json_request("POST", "/todos", json!({"content": "keep me"})))
        .await
        .unwrap();

    for body in [json!({}), json!({"content": null, "completed": null})] {
        let response = app
            .clone()
            .oneshot(json_request("PUT", "/todos/1", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"todo_id": 1, "content": "keep me", "completed": false})
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn update_with_wrong_type_is_unprocessable() {
    let app = test_app().await;

    app.clone()
        .oneshot(json_request("POST", "/todos", json!({"content": "x"})))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request("PUT", "/todos/1", json!({"completed": "yes"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert!(body["detail"].as_str().unwrap().contains("completed"));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_twice_is_not_found_the_second_time() {
    let app = test_app().await;

    app.clone()
        .oneshot(json_request("POST", "/todos", json!({"content": "x"})))
        .await
        .unwrap();

    let first = app
        .clone()
        .oneshot(empty_request("DELETE", "/todos/1"))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let second = app
        .oneshot(empty_request("DELETE", "/todos/1"))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn unregistered_method_is_not_allowed() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request("PATCH", "/todos/1", json!({"completed": true})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// Store failures
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn closed_store_is_service_unavailable() {
    let state = test_state().await;
    state.service().db().close().await;
    let app = create_router(state, false, CancellationToken::new());

    for request in [
        empty_request("GET", "/todos"),
        json_request("POST", "/todos", json!({"content": "x"})),
        empty_request("GET", "/todos/1"),
    ] {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json_body(response).await, json!({"detail": "Store unavailable"}));
    }
}

// =============================================================================
// Wire representation
// =============================================================================

#[test]
fn todo_survives_wire_representation() {
    let todos = [
        Todo {
            id: 7,
            content: "say \"hi\" ünïcødé ✓ \\ tab\tend\n".to_string(),
            completed: true,
        },
        Todo {
            id: 1,
            content: String::new(),
            completed: false,
        },
    ];

    for todo in todos {
        let wire = serde_json::to_string(&TodoResponse::from(todo.clone())).unwrap();
        let decoded: TodoResponse = serde_json::from_str(&wire).unwrap();
        assert_eq!(Todo::from(decoded), todo);
    }
}

#[test]
fn todo_response_uses_wire_field_names() {
    let value = serde_json::to_value(TodoResponse::from(Todo {
        id: 3,
        content: "buy milk".to_string(),
        completed: false,
    }))
    .unwrap();

    assert_eq!(
        value,
        json!({"todo_id": 3, "content": "buy milk", "completed": false})
    );
}
