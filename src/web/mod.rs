//! Static UI server
//!
//! Serves the built web bundle with Axum. Unknown paths fall back to
//! `index.html` so client-side routes (`/auth`, `/dashboard`, ...) load the
//! app, which then resolves them itself.
//!
//! ```rust,no_run
//! use nourish::config::WebConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     nourish::web::serve(&WebConfig::default()).await?;
//!     Ok(())
//! }
//! ```

use crate::config::WebConfig;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Server errors
#[derive(Error, Debug)]
pub enum WebError {
    #[error("UI bundle not found: {0:?} has no index.html")]
    MissingBundle(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router serving `dist_dir`
pub fn build_router(dist_dir: &Path) -> Router {
    let index = dist_dir.join("index.html");
    let assets = ServeDir::new(dist_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/health", get(health))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
}

/// Start the server and run until Ctrl+C or SIGTERM
pub async fn serve(config: &WebConfig) -> Result<(), WebError> {
    let dist_dir = PathBuf::from(&config.dist_dir);
    if !dist_dir.join("index.html").is_file() {
        return Err(WebError::MissingBundle(dist_dir));
    }

    let router = build_router(&dist_dir);
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Nourish UI listening on {} (serving {:?})", addr, dist_dir);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| WebError::Server(e.to_string()))?;

    tracing::info!("Nourish UI server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tempfile::{tempdir, TempDir};
    use tower::util::ServiceExt;

    fn bundle() -> TempDir {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>nourish</html>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('hi')").unwrap();
        dir
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let dir = bundle();
        let (status, body) = get_body(build_router(dir.path()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"status\":\"ok\""));
    }

    #[tokio::test]
    async fn test_serves_assets() {
        let dir = bundle();
        let (status, body) = get_body(build_router(dir.path()), "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log('hi')");
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let dir = bundle();
        for path in ["/dashboard", "/auth", "/update-password", "/no/such/page"] {
            let (status, body) = get_body(build_router(dir.path()), path).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, "<html>nourish</html>", "path {}", path);
        }
    }

    #[tokio::test]
    async fn test_serve_requires_bundle() {
        let dir = tempdir().unwrap();
        let config = WebConfig {
            dist_dir: dir.path().to_string_lossy().to_string(),
            ..WebConfig::default()
        };
        assert!(matches!(serve(&config).await, Err(WebError::MissingBundle(_))));
    }
}
