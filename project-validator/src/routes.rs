//! Router assembly and the small informational endpoints.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Local;
use serde::Serialize;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handlers;

/// Health check response payload.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
}

/// GET /api/health -- liveness check for the frontend and deploys.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Local::now().to_rfc3339(),
    })
}

#[derive(Serialize)]
struct RootResponse {
    message: &'static str,
}

/// GET / -- tells a stray browser what this service is.
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Excel Project Validator API is running",
    })
}

/// Build the application router.
///
/// The body limit and the validation concurrency cap apply to the upload
/// route only, so health checks stay responsive while large uploads are
/// in flight.
pub fn router(config: &ServerConfig) -> Router {
    let cors = build_cors_layer(config);

    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health_check))
        .route(
            "/api/validate",
            post(handlers::validate_upload)
                .layer::<_, Infallible>(GlobalConcurrencyLimitLayer::new(
                    config.max_concurrent_validations,
                ))
                .layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Build the CORS middleware layer from server configuration.
///
/// Panics at startup if any configured origin is invalid.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}
