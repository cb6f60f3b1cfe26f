//! Blob arena - static host with the embedded browser frontend.

use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use rust_embed::RustEmbed;
use std::net::SocketAddr;
use std::sync::OnceLock;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// Embedded static assets from client/web
#[derive(RustEmbed)]
#[folder = "../client/web"]
struct Assets;

// Serialized configuration injected into index.html
static CONFIG_JSON: OnceLock<String> = OnceLock::new();

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sim=debug")),
        )
        .init();

    info!("Blob Arena v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration shared with the browser client
    let config = sim::Config::load()?;
    info!("Loaded configuration");
    info!("  Port: {}", config.server.port);
    info!("  World size: {}", config.world.size);
    info!("  AI opponents: {}", config.ai.count);
    info!("  Food particles: {}", config.food.count);

    let port = config.server.port;
    CONFIG_JSON.set(serde_json::to_string(&config)?).ok();

    // Build the axum router
    let app = Router::new()
        .route("/", get(serve_index))
        .route("/index.html", get(serve_index))
        .fallback(static_handler)
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn serve_index() -> impl IntoResponse {
    serve_static_file("index.html".to_string()).await
}

/// Handle static file requests
async fn static_handler(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/').to_string();

    if path.is_empty() {
        return serve_static_file("index.html".to_string()).await;
    }

    serve_static_file(path).await
}

/// Serve a static file from embedded assets. index.html gets the game
/// configuration injected at its marker comment.
async fn serve_static_file(path: String) -> impl IntoResponse {
    match Assets::get(&path) {
        Some(content) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();

            let body = if path == "index.html" {
                if let Ok(content_str) = std::str::from_utf8(&content.data) {
                    let config_json = CONFIG_JSON.get().cloned().unwrap_or_default();
                    let injected = content_str.replace(
                        "// BLOB_ARENA_CONFIG_INJECT_POINT",
                        &format!("window.GAME_CONFIG = {};", config_json),
                    );
                    axum::body::Body::from(injected)
                } else {
                    axum::body::Body::from(content.data.to_vec())
                }
            } else {
                axum::body::Body::from(content.data.to_vec())
            };

            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime.as_ref())
                .body(body)
                .unwrap()
        }
        None => {
            warn!("Static file not found: {}", path);
            Response::builder()
                .status(StatusCode::NOT_FOUND)
                .body(axum::body::Body::from("404 Not Found"))
                .unwrap()
        }
    }
}
