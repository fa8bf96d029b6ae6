use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::guru::Guru;
use serde_json::json;

/// GET /guru
///
/// Retrieve all teachers in unspecified database order.
///
/// ### Responses
/// - `200 OK` — JSON array of teacher objects under `data`
/// - `500 Internal Server Error` — Database error
pub async fn list_guru(State(app_state): State<AppState>) -> impl IntoResponse {
    match Guru::get_all(app_state.db()).await {
        Ok(gurus) => (
            StatusCode::OK,
            Json(ApiResponse::success(gurus, "Guru retrieved successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

/// GET /guru/{id}
///
/// Retrieve one teacher by ID.
///
/// ### Responses
/// - `200 OK` — the teacher object
/// - `404 Not Found` — no teacher with that ID
/// - `500 Internal Server Error` — Database error
pub async fn get_guru(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match Guru::get_by_id(app_state.db(), id).await {
        Ok(Some(guru)) => (
            StatusCode::OK,
            Json(ApiResponse::success(guru, "Guru retrieved successfully")),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Guru not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

/// GET /guru/user/{id_user}
///
/// Resolve the teacher ID owned by a user account.
pub async fn get_guru_by_user(
    State(app_state): State<AppState>,
    Path(id_user): Path<i64>,
) -> impl IntoResponse {
    match Guru::id_by_user(app_state.db(), id_user).await {
        Ok(Some(id_guru)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                json!({ "id_guru": id_guru }),
                "Guru retrieved successfully",
            )),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Guru not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
