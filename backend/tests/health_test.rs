//! Integration tests for health check endpoints

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_endpoint() {
    let app = common::TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("healthy"));
}

#[tokio::test]
async fn test_liveness_endpoint() {
    let app = common::TestApp::new();

    let response = app.get("/health/live").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("alive"));
}

#[tokio::test]
async fn test_readiness_endpoint() {
    let app = common::TestApp::new();

    let response = app.get("/health/ready").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("\"ready\""));
    assert!(response.body.contains("static_assets"));
}

#[tokio::test]
async fn test_api_v1_root() {
    let app = common::TestApp::new();

    let response = app.get("/api/v1").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Calorie Planner API v1"));
}

#[tokio::test]
async fn test_metrics_disabled_returns_not_found() {
    let app = common::TestApp::new();

    let response = app.get("/metrics").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("NOT_FOUND"));
}

#[tokio::test]
async fn test_api_v1_root_with_trailing_slash() {
    let app = common::TestApp::new();

    let response = app.get("/api/v1/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Calorie Planner API v1"));
}

#[tokio::test]
async fn test_metrics_enabled_renders_exposition() {
    let app = common::TestApp::with_metrics();

    let response = app.get("/metrics").await;

    assert_eq!(response.status, StatusCode::OK);
}
