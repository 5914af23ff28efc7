//! HTTP transport for the style transform.
//!
//! - `POST /style` runs [`unistyle_styles::transform`] ([`style_endpoint`])
//! - every other path serves the client page, either the copy embedded in
//!   the binary ([`assets`]) or files from `static_dir` ([`static_files`])
//!
//! CORS headers and the request body limit come from [`Config`].

pub mod assets;
pub mod error;
pub mod static_files;
pub mod style_endpoint;

pub use error::ServerError;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use axum::routing::post;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use unistyle_styles::{Style, StyleRegistry};

use crate::config::Config;

/// Build the CORS layer for `cors_allow_origin`.
fn cors_layer(origin: &str) -> Result<CorsLayer, ServerError> {
    let allow_origin = if origin.trim() == "*" {
        AllowOrigin::from(Any)
    } else {
        let value =
            HeaderValue::from_str(origin.trim()).map_err(|source| ServerError::InvalidOrigin {
                origin: origin.to_string(),
                source,
            })?;
        AllowOrigin::exact(value)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

fn api_routes<S>(max_body_bytes: usize) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/style", post(style_endpoint::handle_style))
        .layer(DefaultBodyLimit::max(max_body_bytes))
}

/// Build the application router.
pub fn router(config: &Config) -> Result<Router, ServerError> {
    let app = match &config.static_dir {
        Some(dir) => {
            log::info!("Serving client page from {:?}", dir);
            api_routes(config.max_body_bytes)
                .fallback(static_files::serve_static)
                .with_state(ServeDir::new(dir))
        }
        None => api_routes(config.max_body_bytes).fallback(assets::serve_embedded),
    };

    Ok(app.layer(cors_layer(&config.cors_allow_origin)?))
}

/// Bind, serve until Ctrl-C, then return.
pub async fn run(config: Config) -> Result<(), ServerError> {
    config.validate()?;
    let addr = config.socket_addr()?;
    let app = router(&config)?;

    // Build the glyph tables before the first request arrives.
    let registry = StyleRegistry::global();
    log::debug!(
        "Style registry ready: {}",
        Style::all()
            .iter()
            .map(|style| format!("{}({})", style.id(), registry.get(*style).len()))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let local_addr = listener.local_addr().map_err(ServerError::Serve)?;
    log::info!("Server started at http://{local_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler the server runs until killed.
            log::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    }
}
