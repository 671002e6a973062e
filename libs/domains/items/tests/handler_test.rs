//! Handler tests for Items domain
//!
//! These tests drive the items and stats routers directly:
//! - Request deserialization and validation
//! - Response envelopes and HTTP status codes
//! - Persistence through the JSON document repository
//!
//! Routing under `/api`, fallbacks and docs are covered by the app crate.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_items::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::assertions::{assert_error, assert_success};
use test_utils::{TestDataBuilder, TestDataFile};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn items_app(file: &TestDataFile) -> Router {
    let service = ItemService::new(JsonFileRepository::new(file.path()));
    handlers::router(service)
}

fn stats_app(file: &TestDataFile) -> Router {
    let service = ItemService::new(JsonFileRepository::new(file.path()));
    handlers::stats_router(service)
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, json_body(response.into_body()).await)
}

#[tokio::test]
async fn test_create_item_handler_returns_201() {
    let file = TestDataFile::new();
    let app = items_app(&file);

    let (status, body) = send(
        &app,
        json_request("POST", "/", &json!({"name": " Pen ", "category": "Office", "price": 1.5})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Item created successfully");
    let data = assert_success(&body, "create");
    assert_eq!(data, json!({"id": 1, "name": "Pen", "category": "Office", "price": 1.5}));

    assert_eq!(file.read_json(), json!([data]));
}

#[tokio::test]
async fn test_create_delete_create_does_not_reuse_ids() {
    let file = TestDataFile::new();
    let app = items_app(&file);

    let (_, pen) = send(
        &app,
        json_request("POST", "/", &json!({"name": "Pen", "category": "Office", "price": 1.5})),
    )
    .await;
    let (_, cup) = send(
        &app,
        json_request("POST", "/", &json!({"name": "Cup", "category": "Office", "price": 3})),
    )
    .await;
    let delete = Request::builder()
        .method("DELETE")
        .uri("/1")
        .body(Body::empty())
        .unwrap();
    let (status, deleted) = send(&app, delete).await;
    let (_, mug) = send(
        &app,
        json_request("POST", "/", &json!({"name": "Mug", "category": "Office", "price": 2})),
    )
    .await;

    assert_eq!(pen["data"]["id"], 1);
    assert_eq!(cup["data"]["id"], 2);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Item deleted successfully");
    assert_eq!(deleted["data"]["name"], "Pen");
    assert_eq!(mug["data"]["id"], 3);
}

#[tokio::test]
async fn test_create_item_handler_lists_every_invalid_field() {
    let file = TestDataFile::new();
    let app = items_app(&file);

    let (status, body) = send(
        &app,
        json_request("POST", "/", &json!({"name": "", "category": 7, "price": -3})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = assert_error(&body, 400, "validation");
    assert!(message.contains("Name is required"));
    assert!(message.contains("Category is required"));
    assert!(message.contains("Price is required"));
    assert!(body["error"]["details"].is_object());
    assert!(!file.exists());
}

#[tokio::test]
async fn test_create_item_handler_rejects_malformed_json() {
    let file = TestDataFile::new();
    let app = items_app(&file);

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, 400, "malformed json");
}

#[tokio::test]
async fn test_list_items_handler_filters_and_limits() {
    let builder = TestDataBuilder::from_test_name("list_filter");
    let file = TestDataFile::with_items(json!([
        {"id": 1, "name": "Laptop Pro", "category": "Electronics", "price": 2499},
        {"id": 2, "name": "Desk Lamp", "category": "Furniture", "price": 45},
        builder.item(3, "Electronics", 99.0),
    ]));
    let app = items_app(&file);

    let (status, body) = send(&app, get("/?q=electronics&limit=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(assert_success(&body, "list")[0]["id"], 1);

    let (_, body) = send(&app, get("/?q=LAMP")).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "Desk Lamp");

    let (_, body) = send(&app, get("/?limit=0")).await;
    assert_eq!(body["count"], 0);
    assert_eq!(body["data"], json!([]));

    let (_, body) = send(&app, get("/")).await;
    assert_eq!(body["count"], 3);
}

#[tokio::test]
async fn test_list_items_handler_rejects_invalid_limit() {
    let file = TestDataFile::with_items(json!([]));
    let app = items_app(&file);

    for uri in ["/?limit=-1", "/?limit=abc"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(
            assert_error(&body, 400, uri),
            "Limit must be a non-negative number"
        );
    }
}

#[tokio::test]
async fn test_get_item_handler() {
    let builder = TestDataBuilder::from_test_name("get_item");
    let file = TestDataFile::with_items(json!([builder.item(5, "Office", 3.25)]));
    let app = items_app(&file);

    let (status, body) = send(&app, get("/5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(assert_success(&body, "get"), builder.item(5, "Office", 3.25));
    assert!(body.get("message").is_none());

    let (status, body) = send(&app, get("/6")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(assert_error(&body, 404, "missing"), "Item 6 not found");

    let (status, body) = send(&app, get("/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, 400, "non-integer id");
}

#[tokio::test]
async fn test_update_item_handler() {
    let builder = TestDataBuilder::from_test_name("update_item");
    let file = TestDataFile::with_items(json!([
        builder.item(1, "Office", 1.0),
        builder.item(2, "Office", 2.0),
    ]));
    let app = items_app(&file);

    let (status, body) = send(
        &app,
        json_request("PUT", "/2", &json!({"name": "Stapler", "category": "Desk", "price": 8})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Item updated successfully");
    assert_eq!(
        body["data"],
        json!({"id": 2, "name": "Stapler", "category": "Desk", "price": 8.0})
    );
    assert_eq!(file.read_json()[1]["name"], "Stapler");
    assert_eq!(file.read_json()[0], builder.item(1, "Office", 1.0));
}

#[tokio::test]
async fn test_update_missing_item_handler_returns_404() {
    let file = TestDataFile::with_items(json!([]));
    let app = items_app(&file);

    let (status, body) = send(
        &app,
        json_request("PUT", "/999", &json!({"name": "X", "category": "Y", "price": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, 404, "update missing");
}

#[tokio::test]
async fn test_delete_missing_item_handler_returns_404() {
    let file = TestDataFile::with_items(json!([]));
    let app = items_app(&file);

    let request = Request::builder()
        .method("DELETE")
        .uri("/3")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_corrupt_store_returns_500() {
    let file = TestDataFile::with_raw("{ definitely not an array");
    let app = items_app(&file);

    let (status, body) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_error(&body, 500, "corrupt store");
}

#[tokio::test]
async fn test_stats_handler_with_mixed_prices() {
    let file = TestDataFile::with_items(json!([
        {"id": 1, "name": "a", "category": "A", "price": 10},
        {"id": 2, "name": "b", "category": "A", "price": 20},
        {"id": 3, "name": "c", "category": "B", "price": "bad"},
    ]));
    let app = stats_app(&file);

    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);

    let data = assert_success(&body, "stats");
    assert_eq!(data["total"], 3);
    assert_eq!(data["averagePrice"], 15.0);
    assert_eq!(data["totalValue"], 30.0);
    assert_eq!(data["priceRange"], json!({"min": 10.0, "max": 20.0}));
    assert_eq!(
        data["categories"]["A"],
        json!({"count": 2, "totalValue": 30.0, "averagePrice": 15.0})
    );
    assert_eq!(
        data["categories"]["B"],
        json!({"count": 1, "totalValue": 0.0, "averagePrice": 0.0})
    );
    assert!(data["generatedAt"].is_string());
}

#[tokio::test]
async fn test_stats_handler_on_missing_document_is_zeroed() {
    let file = TestDataFile::new();
    let app = stats_app(&file);

    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);

    let data = assert_success(&body, "empty stats");
    assert_eq!(data["total"], 0);
    assert_eq!(data["priceRange"], json!({"min": 0.0, "max": 0.0}));
    assert_eq!(data["categories"], json!({}));
}

#[tokio::test]
async fn test_summary_handler() {
    let file = TestDataFile::with_items(json!([
        {"id": 1, "name": "a", "category": "A", "price": 10.5},
        {"id": 2, "name": "b", "category": "A"},
        {"id": 3, "name": "c", "category": "B", "price": "bad"},
    ]));
    let app = stats_app(&file);

    let (status, body) = send(&app, get("/summary")).await;
    assert_eq!(status, StatusCode::OK);

    let data = assert_success(&body, "summary");
    assert_eq!(data["totalItems"], 3);
    assert_eq!(data["totalValue"], 10.5);
    assert!(data["timestamp"].is_string());
}
