//! Common test utilities for integration tests
//!
//! This module provides shared setup for integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use calorie_planner_backend::{config::AppConfig, routes, state::AppState};
use metrics_exporter_prometheus::PrometheusBuilder;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

/// Response captured by the test client
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestApp {
    /// Create a new test application serving the bundled static assets
    pub fn new() -> Self {
        let state = AppState::new(test_config(), None);
        let app = routes::create_router(state);

        Self { app }
    }

    /// Create a test application with a local Prometheus handle behind `/metrics`
    pub fn with_metrics() -> Self {
        let mut config = test_config();
        config.metrics.enabled = true;
        let handle = PrometheusBuilder::new().build_recorder().handle();
        let state = AppState::new(config, Some(handle));
        let app = routes::create_router(state);

        Self { app }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with a urlencoded form body
    pub async fn post_form(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();

        TestResponse {
            status,
            location,
            body,
        }
    }
}

/// Create test configuration
fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.site.static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/static").into();
    config.metrics.enabled = false;
    config
}
