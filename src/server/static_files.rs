//! Client page served from `static_dir` instead of the embedded copy.
//!
//! File lookup is delegated to [`ServeDir`]; status bodies and content types
//! follow the same rules as [`super::assets`].

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::Response;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use super::assets::{content_type_for, is_read_method, method_not_allowed, not_found};

/// Fallback handler reading files below the configured directory.
pub async fn serve_static(State(dir): State<ServeDir>, request: Request) -> Response {
    if !is_read_method(request.method()) {
        return method_not_allowed();
    }

    let path = request.uri().path().to_string();
    let response = match dir.oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    };

    if response.status() == StatusCode::NOT_FOUND {
        log::debug!("GET {path} -> not found");
        return not_found();
    }

    let mut response = response.map(Body::new);
    if response.status().is_success() {
        // Directory requests resolve to their index.html.
        let served = if path.ends_with('/') {
            format!("{path}index.html")
        } else {
            path
        };
        log::debug!("GET {served} -> {}", response.status());
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(content_type_for(&served)),
        );
    }
    response
}
