use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::user::User;

/// GET /user
///
/// Retrieve all users.
pub async fn list_users(State(app_state): State<AppState>) -> impl IntoResponse {
    match User::get_all(app_state.db()).await {
        Ok(users) => (
            StatusCode::OK,
            Json(ApiResponse::success(users, "User retrieved successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

/// GET /user/{id}
///
/// Retrieve one user by ID, 404 when absent.
pub async fn get_user(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match User::get_by_id(app_state.db(), id).await {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(ApiResponse::success(user, "User retrieved successfully")),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("User not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
