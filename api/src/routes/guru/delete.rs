use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::guru::Guru;

/// DELETE /guru/{id}
///
/// Delete a teacher. Zero rows affected is reported as not found.
pub async fn delete_guru(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match Guru::delete_by_id(app_state.db(), id).await {
        Ok(0) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Guru not found")),
        ),
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Guru deleted successfully")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        ),
    }
}
