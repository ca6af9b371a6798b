//! Entry point for the bookstore-server binary.

use std::sync::Arc;

use bookstore_server::{
    config::BookstoreSettings,
    middleware::request_id::{propagate_request_id_layer, set_request_id_layer},
    routes,
    state::AppState,
};
use bookstore_store::S3Store;
use http::HeaderValue;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load settings
    let settings = BookstoreSettings::from_env()?;

    // Initialize tracing
    init_tracing(&settings.log_level);

    tracing::info!("Starting bookstore-server");

    // Validation decides whether the publish endpoint is mounted; it is
    // computed once here and never re-checked at request time.
    let validation = settings.validate();
    if validation.publish_ready() {
        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            bucket = %settings.s3_bucket,
            prefix = %settings.published_prefix,
            "enabling bookstore publishing"
        );
    } else {
        tracing::info!("not enabling bookstore publishing, endpoint not configured");
    }

    // Build application state with the S3 backend
    let store = Arc::new(S3Store::new(settings.storage_settings()));
    let state = AppState::new(settings.clone(), store);

    // Build CORS layer
    let cors = build_cors_layer(&settings.cors_allowed_origins)?;

    // Build router with middleware
    let app = routes::build_router(state)
        .layer(propagate_request_id_layer())
        .layer(set_request_id_layer())
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Create listener
    let addr = settings.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initialize the tracing subscriber.
fn init_tracing(log_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build CORS layer from configuration.
fn build_cors_layer(
    allowed_origins: &str,
) -> Result<CorsLayer, http::header::InvalidHeaderValue> {
    if allowed_origins == "*" {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origins = allowed_origins
        .split(',')
        .map(|s| s.trim().parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
