//! End-to-end tests driving the full router in-process

use axum::Router;
use axum::body::{Body, Bytes};
use employee_server::{Config, DbService, ServerState, build_app};
use http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn test_app() -> (Router, DbService) {
    let db = DbService::in_memory().await.unwrap();
    let state = ServerState::with_db(Config::with_overrides("memory", 0), db.clone());
    (build_app(state), db)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Bytes) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&v).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, bytes)
}

fn json_body(bytes: &Bytes) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

fn ann() -> Value {
    json!({"firstName":"Ann","lastName":"Lee","email":"ann@x.com","role":"Engineer"})
}

fn bob() -> Value {
    json!({"firstName":"Bob","lastName":"Ray","email":"bob@x.com","role":"Designer"})
}

#[tokio::test]
async fn test_list_empty_store() {
    let (app, _db) = test_app().await;
    let (status, _, body) = send(&app, Method::GET, "/api/employees", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!([]));
}

#[tokio::test]
async fn test_create_then_get() {
    let (app, _db) = test_app().await;

    let (status, headers, body) = send(&app, Method::POST, "/api/employees", Some(ann())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(headers[header::LOCATION], "/api/employees/1");

    let created = json_body(&body);
    assert_eq!(
        created,
        json!({"id":1,"firstName":"Ann","lastName":"Lee","email":"ann@x.com","role":"Engineer"})
    );

    let (status, _, body) = send(&app, Method::GET, "/api/employees/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), created);
}

#[tokio::test]
async fn test_create_assigns_distinct_ids() {
    let (app, _db) = test_app().await;

    let mut ids = Vec::new();
    for _ in 0..5 {
        let (status, _, body) = send(&app, Method::POST, "/api/employees", Some(ann())).await;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(json_body(&body)["id"].as_i64().unwrap());
    }

    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());

    let (_, _, body) = send(&app, Method::GET, "/api/employees", None).await;
    assert_eq!(json_body(&body).as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_create_ignores_client_id() {
    let (app, _db) = test_app().await;
    send(&app, Method::POST, "/api/employees", Some(ann())).await;

    let mut body = bob();
    body["id"] = json!(1);
    let (status, headers, created) = send(&app, Method::POST, "/api/employees", Some(body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json_body(&created)["id"], 2);
    assert_eq!(headers[header::LOCATION], "/api/employees/2");

    let (_, _, original) = send(&app, Method::GET, "/api/employees/1", None).await;
    assert_eq!(json_body(&original)["firstName"], "Ann");
}

#[tokio::test]
async fn test_get_missing_is_empty_404() {
    let (app, _db) = test_app().await;
    let (status, _, body) = send(&app, Method::GET, "/api/employees/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_update_missing_is_empty_404() {
    let (app, _db) = test_app().await;
    let (status, _, body) = send(&app, Method::PUT, "/api/employees/999", Some(ann())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    let (_, _, list) = send(&app, Method::GET, "/api/employees", None).await;
    assert_eq!(json_body(&list), json!([]));
}

#[tokio::test]
async fn test_update_replaces_fields_and_keeps_id() {
    let (app, _db) = test_app().await;
    send(&app, Method::POST, "/api/employees", Some(ann())).await;

    let update = json!({
        "id": 555,
        "firstName": "Anna",
        "lastName": "Lee-Park",
        "email": "anna@x.com",
        "role": "Manager"
    });
    let (status, _, body) = send(&app, Method::PUT, "/api/employees/1", Some(update)).await;

    let expected =
        json!({"id":1,"firstName":"Anna","lastName":"Lee-Park","email":"anna@x.com","role":"Manager"});
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), expected);

    let (_, _, fetched) = send(&app, Method::GET, "/api/employees/1", None).await;
    assert_eq!(json_body(&fetched), expected);

    let (status, _, _) = send(&app, Method::GET, "/api/employees/555", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_get_absent() {
    let (app, _db) = test_app().await;
    send(&app, Method::POST, "/api/employees", Some(ann())).await;
    send(&app, Method::POST, "/api/employees", Some(bob())).await;

    let (status, _, body) = send(&app, Method::DELETE, "/api/employees/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, _, _) = send(&app, Method::GET, "/api/employees/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, _, list) = send(&app, Method::GET, "/api/employees", None).await;
    let list = json_body(&list);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["firstName"], "Bob");
}

#[tokio::test]
async fn test_delete_missing_is_idempotent() {
    let (app, _db) = test_app().await;
    send(&app, Method::POST, "/api/employees", Some(ann())).await;

    for _ in 0..2 {
        let (status, _, body) = send(&app, Method::DELETE, "/api/employees/42", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());
    }

    let (_, _, list) = send(&app, Method::GET, "/api/employees", None).await;
    assert_eq!(json_body(&list).as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_body_missing_field_is_validation_error() {
    let (app, _db) = test_app().await;

    let missing_role = json!({"firstName":"Ann","lastName":"Lee","email":"ann@x.com"});
    let (status, _, body) = send(&app, Method::POST, "/api/employees", Some(missing_role)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(&body)["code"], 2);

    send(&app, Method::POST, "/api/employees", Some(ann())).await;
    let wrong_type = json!({"firstName":1,"lastName":"Lee","email":"ann@x.com","role":"x"});
    let (status, _, body) = send(&app, Method::PUT, "/api/employees/1", Some(wrong_type)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(&body)["code"], 2);

    let (_, _, fetched) = send(&app, Method::GET, "/api/employees/1", None).await;
    assert_eq!(json_body(&fetched)["firstName"], "Ann");
}

#[tokio::test]
async fn test_unparsable_body_is_invalid_request() {
    let (app, _db) = test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/employees")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(json_body(&body)["code"], 5);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/employees")
        .body(Body::from(serde_json::to_vec(&ann()).unwrap()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (_, _, list) = send(&app, Method::GET, "/api/employees", None).await;
    assert_eq!(json_body(&list), json!([]));
}

#[tokio::test]
async fn test_non_numeric_id_rejected() {
    let (app, _db) = test_app().await;

    for method in [Method::GET, Method::DELETE] {
        let (status, _, body) = send(&app, method, "/api/employees/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_body(&body)["code"], 5);
    }

    let (status, _, _) = send(&app, Method::PUT, "/api/employees/abc", Some(ann())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_storage_failure_is_500() {
    let (app, db) = test_app().await;
    db.pool.close().await;

    let (status, _, body) = send(&app, Method::GET, "/api/employees", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(&body);
    assert_eq!(body["code"], 9002);
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (app, _db) = test_app().await;
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/employees")
        .header(header::ORIGIN, "http://elsewhere.example")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_request_id_generated_when_absent() {
    let (app, _db) = test_app().await;

    let (_, first, _) = send(&app, Method::GET, "/health", None).await;
    let (_, second, _) = send(&app, Method::GET, "/api/employees/7", None).await;

    let first = first["x-request-id"].to_str().unwrap().to_string();
    let second = second["x-request-id"].to_str().unwrap().to_string();
    assert!(uuid::Uuid::parse_str(&first).is_ok());
    assert!(uuid::Uuid::parse_str(&second).is_ok());
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_request_id_echoed() {
    let (app, _db) = test_app().await;

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "abc-123");
}

#[tokio::test]
async fn test_health_endpoints() {
    let (app, _db) = test_app().await;
    send(&app, Method::POST, "/api/employees", Some(ann())).await;

    let (status, _, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body)["status"], "healthy");

    let (status, _, body) = send(&app, Method::GET, "/health/detailed", None).await;
    let body = json_body(&body);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert_eq!(body["checks"]["database"]["employees"], 1);
}

#[tokio::test]
async fn test_detailed_health_degraded_when_store_closed() {
    let (app, db) = test_app().await;
    db.pool.close().await;

    let (status, _, body) = send(&app, Method::GET, "/health/detailed", None).await;
    let body = json_body(&body);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["database"]["status"], "error");
}
