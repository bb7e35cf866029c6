//! Order management service binary.
//!
//! Serves the `/orders` REST resource backed by `PostgreSQL`.
//!
//! # Architecture
//!
//! - Axum web framework over a shared [`AppState`]
//! - A three-operation store interface (`find_by_id` / `save` /
//!   `delete_by_id`) with the `PostgreSQL` implementation wired in here
//! - Validation runs in the handlers before any store write
//! - Migrations are embedded and applied on startup

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use order_management_core::OrderId;
use order_management_server::config::OrdersConfig;
use order_management_server::db::{self, PgOrderStore};
use order_management_server::routes;
use order_management_server::state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration from environment (reads .env if present)
    let config = OrdersConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "order_management_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Initialize database connection pool
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to apply migrations");
    tracing::info!("Migrations applied");

    // Build application state around the PostgreSQL store
    let store = Arc::new(PgOrderStore::new(pool));
    let state = AppState::new(config.clone(), store);

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("order management server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Runs a store lookup before returning OK; a miss still proves the store
/// answered. Returns 503 Service Unavailable if the store is unreachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.store().find_by_id(OrderId::new(0)).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
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
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
