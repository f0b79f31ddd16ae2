//! Application startup and lifecycle management.
//!
//! Builds the router, binds the listener (port 0 picks a free port for
//! tests) and runs the HTTP server until stopped.

use crate::config::InquiryConfig;
use crate::error::AppError;
use crate::handlers;
use crate::middleware::{metrics::metrics_middleware, request_id::request_id_middleware};
use crate::services::{get_metrics, InquiryDb};
use axum::{
    extract::State,
    http::StatusCode,
    middleware::from_fn,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: InquiryConfig,
    pub db: InquiryDb,
}

/// Health check endpoint for Docker/K8s liveness probes.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "service": "inquiry-service",
                "version": env!("CARGO_PKG_VERSION")
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "unhealthy",
                "service": "inquiry-service",
                "error": e.to_string()
            })),
        ),
    }
}

/// Readiness check endpoint for K8s readiness probes.
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.health_check().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/test", get(handlers::connection_test))
        .route("/schema", get(handlers::get_schema))
        .route(
            "/api/inquiries",
            post(handlers::create_inquiry).get(handlers::list_inquiries),
        )
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// The MongoDB client is lazy, so this succeeds even when the
    /// database is down and the diagnostic routes keep working.
    pub async fn build(config: InquiryConfig) -> Result<Self, AppError> {
        let db = InquiryDb::connect(
            &config.mongodb.uri,
            &config.mongodb.database,
            Duration::from_millis(config.mongodb.server_selection_timeout_ms),
        )
        .await
        .map_err(|e| {
            tracing::error!("Failed to initialize MongoDB client: {}", e);
            e
        })?;

        let state = AppState {
            config: config.clone(),
            db,
        };

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &InquiryDb {
        &self.state.db
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let app = build_router(self.state);
        axum::serve(self.listener, app).await
    }
}
