//! The built-in client page, compiled into the binary.

use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

/// A static file served from memory.
#[derive(Debug, Clone, Copy)]
pub struct Asset {
    pub path: &'static str,
    pub body: &'static str,
}

/// Every file of the client page.
pub const ASSETS: &[Asset] = &[
    Asset {
        path: "/index.html",
        body: include_str!("../../assets/index.html"),
    },
    Asset {
        path: "/styles.css",
        body: include_str!("../../assets/styles.css"),
    },
    Asset {
        path: "/script.js",
        body: include_str!("../../assets/script.js"),
    },
];

/// Content type by file extension; unknown extensions are served as plain text.
pub fn content_type_for(path: &str) -> &'static str {
    let extension = path
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.contains('/'))
        .unwrap_or("");
    match extension {
        "html" => "text/html",
        "css" => "text/css",
        "js" => "application/javascript",
        "png" => "image/png",
        "jpg" => "image/jpeg",
        "ico" => "image/x-icon",
        _ => "text/plain",
    }
}

/// Find the embedded asset for a request path. `/` means `/index.html`.
pub fn find_asset(path: &str) -> Option<&'static Asset> {
    let path = if path == "/" { "/index.html" } else { path };
    ASSETS.iter().find(|asset| asset.path == path)
}

/// Only `GET` and `HEAD` read files.
pub(crate) fn is_read_method(method: &Method) -> bool {
    method == Method::GET || method == Method::HEAD
}

pub(crate) fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET, HEAD")],
    )
        .into_response()
}

pub(crate) fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "File not found").into_response()
}

/// Fallback handler serving [`ASSETS`].
pub async fn serve_embedded(method: Method, uri: Uri) -> Response {
    if !is_read_method(&method) {
        return method_not_allowed();
    }

    match find_asset(uri.path()) {
        Some(asset) => {
            log::debug!("GET {} -> {}", uri.path(), asset.path);
            (
                [(header::CONTENT_TYPE, content_type_for(asset.path))],
                asset.body,
            )
                .into_response()
        }
        None => {
            log::debug!("GET {} -> not found", uri.path());
            not_found()
        }
    }
}
