//! Nourish UI Server
//!
//! Run with: cargo run --bin nourish-web
//!
//! Serves the built `nourish-ui` bundle (see `[web]` in the config).
//!
//! Environment variables:
//! - `NOURISH_WEB_HOST`: Host to bind to (default: 0.0.0.0)
//! - `NOURISH_WEB_PORT`: Port to listen on (default: 8080)
//! - `NOURISH_WEB_DIST`: Bundle directory (default: nourish-ui/dist)
//! - `RUST_LOG`: Log filter (overrides `[logging] level`)

use nourish::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    nourish::logging::init(&config.logging);

    tracing::info!("Starting Nourish UI server v{}", env!("CARGO_PKG_VERSION"));

    nourish::web::serve(&config.web).await?;

    tracing::info!("Nourish UI server stopped");
    Ok(())
}
