use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// Liveness probe; always answers 200 when the process is serving.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::success("OK", "Health check passed")),
    )
}
