//! Shared integration test helpers for unistyle.
//!
//! Include with `mod common;` at the top of a test file. The
//! `#[allow(dead_code)]` below suppresses warnings when a file uses only some
//! of the helpers.

#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use tower::ServiceExt;
use unistyle::config::Config;

/// Response pieces the tests look at.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body should be UTF-8")
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body should be JSON")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Router built from the default config.
pub fn default_router() -> Router {
    unistyle::server::router(&Config::default()).expect("default config builds a router")
}

/// Send one request through `router` and collect the response.
pub async fn send(router: Router, request: Request<Body>) -> TestResponse {
    let response = router
        .oneshot(request)
        .await
        .expect("router service is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should be readable")
        .to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

/// Build a `POST /style` request.
pub fn style_request(content_type: Option<&str>, body: impl Into<Body>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri("/style");
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    builder.body(body.into()).expect("request should build")
}

/// Build a `GET` request for `path`.
pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .expect("request should build")
}

/// Creates a temporary config directory and returns the path of a
/// `config.yaml` inside it (not yet written).
///
/// The `TempDir` must be kept alive until all config I/O has completed.
pub fn setup_config_file() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_dir = temp_dir.path().join("unistyle");
    fs::create_dir_all(&config_dir).expect("Failed to create config dir");
    (temp_dir, config_dir.join("config.yaml"))
}
