//! REST API endpoints.
//!
//! Axum-based HTTP API serving the derived league views as JSON, plus the
//! front-end's static assets when a static directory is configured.

pub mod routes;
pub mod state;

use std::path::PathBuf;

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;

use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    build_router_with_static(state, None, "*")
}

/// Build the router with CORS and an optional static asset directory.
pub fn build_router_with_static(
    state: AppState,
    static_dir: Option<PathBuf>,
    cors_origin: &str,
) -> Router {
    let api = Router::new()
        .route("/api/health", get(routes::overview::health))
        .route("/api/overview", get(routes::overview::overview))
        .route(
            "/api/championships",
            get(routes::championships::list_championships),
        )
        .route(
            "/api/championships/leaderboard",
            get(routes::championships::leaderboard),
        )
        .route(
            "/api/championships/streaks",
            get(routes::championships::streaks),
        )
        .route(
            "/api/championships/managers/:name",
            get(routes::championships::manager_championships),
        )
        .route("/api/head-to-head", get(routes::head_to_head::list_head_to_head))
        .route(
            "/api/head-to-head/:manager",
            get(routes::head_to_head::manager_head_to_head),
        )
        .route(
            "/api/power-rankings",
            get(routes::power_rankings::list_seasons),
        )
        .route(
            "/api/power-rankings/:season",
            get(routes::power_rankings::season_rankings),
        )
        .route("/api/records", get(routes::records::all_time_records))
        .with_state(state);

    let app = match static_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api,
    };

    app.layer(cors_layer(cors_origin))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origin == "*" {
        return layer.allow_origin(Any);
    }
    match HeaderValue::from_str(origin) {
        Ok(value) => layer.allow_origin(value),
        Err(_) => {
            warn!("Invalid CORS origin {:?}, allowing any origin", origin);
            layer.allow_origin(Any)
        }
    }
}
