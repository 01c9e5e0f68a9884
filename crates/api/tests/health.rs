//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get, MemoryStore};

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = common::build_test_app(Arc::new(MemoryStore::default()));
    let response = get(app, "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

#[tokio::test]
async fn health_check_reports_degraded_store() {
    let store = Arc::new(MemoryStore::default());
    store.fail_reads.store(true, Ordering::SeqCst);
    let app = common::build_test_app(store);

    let json = body_json(get(app, "/health", None).await).await;

    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app(Arc::new(MemoryStore::default()));
    let response = get(app, "/this-route-does-not-exist", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app(Arc::new(MemoryStore::default()));
    let response = get(app, "/health", None).await;

    assert!(
        response.headers().contains_key("x-request-id"),
        "response must carry x-request-id"
    );
}
