//! Annotator Service - Main Entry Point
//!
//! HTTP front door for the structural source-code annotator.

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use annotator::api::handlers::{self, AppState};
use annotator::processing::FileAnnotator;
use annotator::types::AnnotatorConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "annotator=info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = AnnotatorConfig::from_env();

    info!("Starting Annotator Service v{}", env!("CARGO_PKG_VERSION"));
    info!("Max file size: {} bytes", config.max_file_size);

    let annotator = Arc::new(FileAnnotator::new());
    info!(languages = ?annotator.languages(), "Registered language front-ends");

    let state = Arc::new(AppState { annotator, config });

    // Build HTTP routes
    let app = Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Capabilities
        .route("/languages", get(handlers::list_languages))
        // Single-file operations
        .route("/annotate", post(handlers::annotate))
        .route("/strip", post(handlers::strip))
        .route("/chunks", post(handlers::chunks))
        // Batch
        .route("/annotate/batch", post(handlers::annotate_batch))
        // State
        .with_state(state)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start server
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3019);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
